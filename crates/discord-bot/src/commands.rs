use serenity::builder::CreateApplicationCommands;

pub mod scrims;

/// Register all commands for the bot.
///
/// Adds the slash commands the bot responds to, including their options,
/// descriptions, and permissions.
pub fn register_commands(
    commands: &mut CreateApplicationCommands,
) -> &mut CreateApplicationCommands {
    // Scrims manager dashboard
    commands.create_application_command(|command| {
        *command = scrims::smanager_command();
        command
    });

    // Guild prefix setting
    commands.create_application_command(|command| {
        *command = scrims::setprefix_command();
        command
    });

    commands
}

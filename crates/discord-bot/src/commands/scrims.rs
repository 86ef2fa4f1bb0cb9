use serenity::{
    builder::CreateApplicationCommand,
    model::{application::command::CommandOptionType, Permissions},
};

/// Command that opens the scrims manager dashboard
pub fn smanager_command() -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command
        .name("smanager")
        .description("Open the scrims manager dashboard")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .dm_permission(false);

    command
}

/// Command that sets a custom command prefix for the guild
pub fn setprefix_command() -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command
        .name("setprefix")
        .description("Set a custom command prefix for this server")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .dm_permission(false)
        .create_option(|option| {
            option
                .name("prefix")
                .description("The new prefix (up to 10 characters)")
                .kind(CommandOptionType::String)
                .required(true)
        });

    command
}

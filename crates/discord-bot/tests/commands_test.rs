use scrimhub_discord_bot::commands;
use serenity::builder::CreateApplicationCommands;

#[test]
fn test_register_commands() {
    // Test that the commands registration function works without panicking
    let mut commands = CreateApplicationCommands::default();
    commands::register_commands(&mut commands);

    assert_eq!(commands.0.len(), 2);
}

#[test]
fn test_smanager_command_shape() {
    let command = commands::scrims::smanager_command();

    assert_eq!(
        command.0.get("name").and_then(|v| v.as_str()),
        Some("smanager")
    );
}

#[test]
fn test_setprefix_command_shape() {
    let command = commands::scrims::setprefix_command();

    assert_eq!(
        command.0.get("name").and_then(|v| v.as_str()),
        Some("setprefix")
    );
    // The prefix option is required
    let options = command
        .0
        .get("options")
        .and_then(|v| v.as_array())
        .expect("setprefix should carry options");
    assert_eq!(options.len(), 1);
}

use crate::{CardCommands, Cli, Commands, SessionCommands};

use clap::Parser;

#[test]
fn given_login_args_when_parsed_then_session_login_command() {
    // When
    let cli = Cli::try_parse_from([
        "bankdash", "session", "login", "--email", "a@b.com", "--password", "x",
    ])
    .unwrap();

    // Then
    match cli.command {
        Commands::Session {
            action: SessionCommands::Login { email, password },
        } => {
            assert_eq!(email, "a@b.com");
            assert_eq!(password, "x");
        }
        other => panic!("unexpected command: {other:?}"),
    }
    assert!(!cli.pretty);
}

#[test]
fn given_pretty_after_subcommand_when_parsed_then_flag_is_global() {
    // When
    let cli = Cli::try_parse_from(["bankdash", "dashboard", "--pretty"]).unwrap();

    // Then
    assert!(matches!(cli.command, Commands::Dashboard));
    assert!(cli.pretty);
}

#[test]
fn given_freeze_position_when_parsed_then_position_captured() {
    // When
    let cli = Cli::try_parse_from(["bankdash", "cards", "freeze", "2"]).unwrap();

    // Then
    assert!(matches!(
        cli.command,
        Commands::Cards {
            action: CardCommands::Freeze { position: 2 }
        }
    ));
}

#[test]
fn given_add_without_bank_when_parsed_then_bank_defaults_to_empty() {
    // When
    let cli = Cli::try_parse_from([
        "bankdash",
        "cards",
        "add",
        "--holder",
        "Ann Lee",
        "--number",
        "4111 1111 1111 1111",
        "--cvv",
        "123",
        "--valid-thru",
        "04/29",
        "--provider",
        "visa",
    ])
    .unwrap();

    // Then
    match cli.command {
        Commands::Cards {
            action: CardCommands::Add { bank, provider, .. },
        } => {
            assert_eq!(bank, "");
            assert_eq!(provider, "visa");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_register_without_confirmation_when_parsed_then_rejected() {
    // When
    let result = Cli::try_parse_from([
        "bankdash", "session", "register", "--name", "Ann", "--email", "a@b.com", "--password",
        "password1",
    ]);

    // Then
    assert!(result.is_err());
}

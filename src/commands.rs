//! Chat commands

use teloxide::utils::command::BotCommands;

/// Commands accepted by the bot
///
/// `login` and `submit` take the rest of the message as a single argument
/// so multiline JSON survives parsing; validation happens in the handlers.
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "show available order types and order submission templates")]
    Start,

    #[command(description = "show this help message")]
    Help,

    #[command(description = "login to the exchange: /login <username> <password>")]
    Login(String),

    #[command(description = "submit an order as JSON")]
    Submit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_keeps_multiline_payload() {
        let parsed = Command::parse("/submit {\"type\": \"LIMIT\",\n\"qty\": 1}", "testbot").unwrap();

        match parsed {
            Command::Submit(payload) => {
                assert!(payload.contains('\n'));
                assert!(payload.starts_with("{\"type\""));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_login_takes_rest_of_line() {
        let parsed = Command::parse("/login alice secret", "testbot").unwrap();

        match parsed {
            Command::Login(credentials) => assert_eq!(credentials, "alice secret"),
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_commands_are_case_sensitive() {
        assert!(Command::parse("/Start", "testbot").is_err());
        assert!(Command::parse("/start", "testbot").is_ok());
    }
}

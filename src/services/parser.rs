use crate::message::{InboundMessage, SenderType};

/// A prefixed chat message broken into its command word and the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Command word, lowercased.
    pub command: String,
    /// Everything after the command word, empty if there was nothing.
    pub query: String,
}

/// Extract a command from an inbound message.
///
/// Returns `None` unless the message was sent by a user and starts with the
/// prefix. Command syntax is not validated here; unknown commands are the
/// dispatcher's problem.
pub fn parse_command(message: &InboundMessage, prefix: &str) -> Option<ParsedCommand> {
    if message.sender_type != SenderType::User {
        return None;
    }
    let rest = message.text.strip_prefix(prefix)?.trim();
    if rest.is_empty() {
        // Just the prefix, no command word.
        return None;
    }
    let (command, query) = match rest.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim_start()),
        None => (rest, ""),
    };
    Some(ParsedCommand {
        command: command.to_lowercase(),
        query: query.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_message(text: &str) -> InboundMessage {
        InboundMessage {
            text: text.to_string(),
            sender_type: SenderType::User,
            group_id: "g1".to_string(),
        }
    }

    #[test]
    fn splits_command_and_query() {
        let parsed = parse_command(&user_message("%meme drake, top, bottom"), "%").unwrap();
        assert_eq!(parsed.command, "meme");
        assert_eq!(parsed.query, "drake, top, bottom");
    }

    #[test]
    fn command_is_case_folded() {
        let parsed = parse_command(&user_message("%MeMe hello"), "%").unwrap();
        assert_eq!(parsed.command, "meme");
    }

    #[test]
    fn query_defaults_to_empty() {
        let parsed = parse_command(&user_message("%help"), "%").unwrap();
        assert_eq!(parsed.command, "help");
        assert_eq!(parsed.query, "");
    }

    #[test]
    fn whitespace_run_separates_exactly_once() {
        let parsed = parse_command(&user_message("%meme   a  b "), "%").unwrap();
        assert_eq!(parsed.command, "meme");
        assert_eq!(parsed.query, "a  b");
    }

    #[test]
    fn rejects_unprefixed_text() {
        assert_eq!(parse_command(&user_message("hello there"), "%"), None);
    }

    #[test]
    fn rejects_bare_prefix() {
        assert_eq!(parse_command(&user_message("%"), "%"), None);
        assert_eq!(parse_command(&user_message("%   "), "%"), None);
    }

    #[test]
    fn rejects_non_user_senders() {
        for sender_type in [SenderType::Bot, SenderType::System] {
            let message = InboundMessage {
                text: "%help".to_string(),
                sender_type,
                group_id: "g1".to_string(),
            };
            assert_eq!(parse_command(&message, "%"), None);
        }
    }
}

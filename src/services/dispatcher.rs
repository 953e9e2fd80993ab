use tracing::error;

use crate::services::factory::{FactoryError, ResponseGenerator};
use crate::services::parser::ParsedCommand;
use crate::services::response::{Response, ResponseUnit};

/// Map a parsed command to the responses it deserves.
///
/// `help` is the one built-in; every other command word goes to the factory
/// verbatim. Collaborator failures are turned into a text unit here so the
/// reply task never dies on a bad command.
pub async fn dispatch(
    parsed: &ParsedCommand,
    factory: &dyn ResponseGenerator,
    prefix: &str,
) -> Response {
    if parsed.command == "help" {
        let usage = format!(
            "Generate a meme as follows:\n\n{prefix}[template name]\nFirst caption\nSecond caption\netc."
        );
        let listing = match factory.list_templates().await {
            Ok(listing) => listing,
            Err(err) => {
                error!("listing templates failed: {err}");
                "The template list isn't available right now.".to_string()
            }
        };
        return Response::Batch(vec![Response::text(usage), Response::text(listing)]);
    }

    match factory.response(&parsed.command, &parsed.query).await {
        Ok(reply) => Response::Unit(ResponseUnit::from_reply(reply)),
        Err(FactoryError::Rejected(reason)) => Response::text(reason),
        Err(err) => {
            error!(command = %parsed.command, "factory call failed: {err}");
            Response::text("Something went wrong generating that. Try again in a bit.")
        }
    }
}

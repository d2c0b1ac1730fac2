//! anan-core: turn one daily sales chat message into a revenue report reply.
//!
//! The pipeline is parse -> calculate -> render, all pure and synchronous:
//! the chat glue hands in the message text and sends back whatever string
//! [`reply`] returns. Messages that cannot be parsed still produce a
//! sendable reply body explaining the problem.

pub mod message;
pub mod report;
pub mod revenue;

pub use message::{parse_message, ParseError, ParsedInput, Tier};
pub use report::{format_currency, render_report};
pub use revenue::{calculate, RevenueBreakdown};

/// Run the full pipeline on one message and produce the reply body.
///
/// Never fails: a rejected message yields the user-facing explanation
/// instead of the report.
pub fn reply(text: &str) -> String {
    match parse_message(text) {
        Ok(input) => {
            let breakdown = calculate(&input);
            render_report(&input, &breakdown)
        }
        Err(e) => e.user_message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_is_idempotent() {
        let text = "12/5 2dacbiet 3super 1vip cknv 50";
        assert_eq!(reply(text), reply(text));
    }

    #[test]
    fn test_reply_never_panics_on_rejection() {
        let body = reply("cknv oops");
        assert!(body.contains("oops"));
        assert!(!body.contains("Tổng"));
    }
}

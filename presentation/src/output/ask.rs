//! One-shot question mode
//!
//! Runs exactly one turn through the same controller the TUI uses and
//! prints the assistant reply.

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ReplySpinner;
use twin_application::{ChatSessionController, SubmitRejected};

/// Ask one question and print the reply.
///
/// Returns the reply text. A blank question is rejected without sending.
pub async fn run_ask(
    controller: &mut ChatSessionController,
    question: &str,
    assistant_name: &str,
    quiet: bool,
) -> Result<String, SubmitRejected> {
    let fallback = controller.settings().fallback_reply.clone();

    if !quiet {
        print!(
            "{}",
            ConsoleFormatter::header(assistant_name, controller.model_name())
        );
    }

    let spinner = ReplySpinner::start(controller.model_name(), quiet);
    let result = controller.submit(question).await;

    let reply = match result {
        Ok(reply) => reply.clone(),
        Err(rejected) => {
            spinner.finish(true);
            return Err(rejected);
        }
    };
    spinner.finish(reply.text() != fallback);

    if quiet {
        print!("{}", ConsoleFormatter::format_plain(&reply));
    } else {
        print!("{}", ConsoleFormatter::format_message(&reply, assistant_name));
    }

    Ok(reply.text().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use twin_application::{ChatSettings, GatewayError, GenerationGateway, GenerationRequest};
    use twin_domain::PersonaContext;

    struct FixedGateway(Result<String, GatewayError>);

    #[async_trait]
    impl GenerationGateway for FixedGateway {
        fn model_name(&self) -> &str {
            "fixed"
        }

        async fn generate(&self, _request: &GenerationRequest) -> Result<String, GatewayError> {
            self.0.clone()
        }
    }

    fn controller(result: Result<String, GatewayError>) -> ChatSessionController {
        ChatSessionController::new(
            Arc::new(FixedGateway(result)),
            PersonaContext::new("persona"),
            ChatSettings::default().with_fallback_reply("offline"),
        )
    }

    #[tokio::test]
    async fn test_run_ask_returns_reply() {
        let mut ctl = controller(Ok("Hello there".into()));
        let reply = run_ask(&mut ctl, "hi", "AI Twin", true).await.unwrap();
        assert_eq!(reply, "Hello there");
        assert_eq!(ctl.transcript().len(), 3);
    }

    #[tokio::test]
    async fn test_run_ask_failure_prints_fallback() {
        let mut ctl = controller(Err(GatewayError::MissingApiKey));
        let reply = run_ask(&mut ctl, "hi", "AI Twin", true).await.unwrap();
        assert_eq!(reply, "offline");
    }

    #[tokio::test]
    async fn test_run_ask_rejects_blank_question() {
        let mut ctl = controller(Ok("unused".into()));
        let err = run_ask(&mut ctl, "   ", "AI Twin", true).await.unwrap_err();
        assert_eq!(err, SubmitRejected::EmptyInput);
        assert_eq!(ctl.transcript().len(), 1);
    }
}

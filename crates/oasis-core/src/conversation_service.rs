//! Reducer-style chat updates: each submission returns a new conversation.

use oasis_domain::{AssistantContext, Conversation, Message};

use crate::{assistant_service::AssistantService, time::Clock, CoreError};

pub struct ConversationService;

impl ConversationService {
    /// A conversation opened by ZENO's greeting.
    pub fn start(clock: &dyn Clock) -> Conversation {
        Conversation::from_messages(vec![Message::assistant(
            AssistantService::greeting(),
            clock.now(),
        )])
    }

    /// Appends the user's message and ZENO's reply. Blank input is rejected and
    /// `conversation` itself is never modified.
    pub fn submit(
        conversation: &Conversation,
        text: &str,
        assistant: &AssistantService,
        context: &AssistantContext,
        clock: &dyn Clock,
    ) -> Result<Conversation, CoreError> {
        ensure_text(text)?;
        let question = Message::user(text, clock.now());
        let reply = assistant.respond(text, conversation.messages(), context);
        let answer = Message::assistant(reply, clock.now());
        Ok(conversation.extended([question, answer]))
    }

    /// Records `text` answered by ZENO's apology, for when a reply could not
    /// be produced. Blank input is rejected as in [`Self::submit`].
    pub fn record_failure(
        conversation: &Conversation,
        text: &str,
        clock: &dyn Clock,
    ) -> Result<Conversation, CoreError> {
        ensure_text(text)?;
        let question = Message::user(text, clock.now());
        let apology = Message::assistant(AssistantService::connection_error_reply(), clock.now());
        Ok(conversation.extended([question, apology]))
    }
}

fn ensure_text(text: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation("message text is empty".into()));
    }
    Ok(())
}

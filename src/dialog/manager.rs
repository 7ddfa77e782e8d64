//! DialogManager — coordinates classification, session state, question
//! sequencing, and knowledge-base resolution into the next reply.
//!
//! One inbound `(message, phone)` pair is one turn. Turns for the same
//! phone number are serialized through a per-key lock so two overlapping
//! messages can never both advance `step` from the same starting point;
//! different phone numbers proceed in parallel. Every state mutation is
//! committed to the store before the reply is returned, so a restart
//! resumes exactly at the persisted step.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::dialog::flow::QuestionFlow;
use crate::dialog::session::{DialogStep, Session};
use crate::error::Result;
use crate::i18n::{PhraseKey, Translator};
use crate::kb::{KnowledgeBase, Resolution};
use crate::nlu::{IntentClassifier, LanguageDetector, SegmentExtractor};
use crate::store::SessionStore;
use crate::summarize::summarize;

/// Orchestrates one dialog turn per inbound message.
pub struct DialogManager {
    store: Arc<dyn SessionStore>,
    classifier: IntentClassifier,
    detector: LanguageDetector,
    segments: SegmentExtractor,
    flow: QuestionFlow,
    kb: KnowledgeBase,
    translator: Translator,
    /// Per-phone turn locks; grown on demand, never pruned (one entry per
    /// active phone number is small).
    turn_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl DialogManager {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            classifier: IntentClassifier::new(),
            detector: LanguageDetector::new(),
            segments: SegmentExtractor::new(),
            flow: QuestionFlow::new(),
            kb: KnowledgeBase::new(),
            translator: Translator::new(),
            turn_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Handle one inbound message and produce the reply text.
    pub async fn handle(&self, phone: &str, message: &str) -> Result<String> {
        let lock = self.turn_lock(phone).await;
        let _guard = lock.lock().await;

        let Some(mut session) = self.store.load(phone).await? else {
            return self.start_session(phone, message).await;
        };

        if !session.completed {
            // The initiating message is never an answer; everything after
            // it answers the field named by `step`.
            if let DialogStep::Awaiting { field } = session.step {
                session.record_answer(field, message.trim().to_lowercase());
                debug!(phone, field = %field, "answer recorded");
            }

            if let Some(question) = session.next_unanswered(&self.flow) {
                let question = *question;
                session.advance_to(question.field);
                self.store.save(phone, &session).await?;
                return Ok(self
                    .translator
                    .resolve(question.prompt, session.locale)
                    .to_string());
            }

            session.complete();
            self.store.save(phone, &session).await?;
            info!(phone, intent = %session.intent, "dialog completed");
        }

        Ok(self.final_reply(&session))
    }

    /// Explicitly reset a phone number's session. The next inbound message
    /// starts a fresh dialog.
    pub async fn reset(&self, phone: &str) -> Result<()> {
        let lock = self.turn_lock(phone).await;
        let _guard = lock.lock().await;

        self.store.delete(phone).await?;
        info!(phone, "session reset");
        Ok(())
    }

    /// First turn for an unseen phone number: classify, detect locale,
    /// create the session, and ask the first question.
    async fn start_session(&self, phone: &str, message: &str) -> Result<String> {
        let locale = self.detector.detect(message);
        let intent = self.classifier.classify(message);
        let mut session = Session::new(intent, locale);
        info!(phone, %intent, %locale, "session created");

        if let Some(question) = session.next_unanswered(&self.flow) {
            let question = *question;
            session.advance_to(question.field);
            self.store.save(phone, &session).await?;
            return Ok(self.translator.resolve(question.prompt, locale).to_string());
        }

        // No questions to ask (unknown intent): the session completes on
        // its first turn with the fallback reply.
        session.complete();
        self.store.save(phone, &session).await?;
        Ok(self.final_reply(&session))
    }

    /// Compose the final answer for a completed session: knowledge-base
    /// text + links, localized, length-bounded.
    fn final_reply(&self, session: &Session) -> String {
        let locale = session.locale;
        let segment = self.segments.extract(&session.profile_text(&self.flow));

        match self.kb.resolve(session.intent, segment) {
            Resolution::Answer(entry) => {
                let label = self.translator.resolve(PhraseKey::LinksLabel, locale);
                let text = format!(
                    "{}{}{}",
                    self.translator.resolve(entry.summary, locale),
                    label,
                    entry.links.join(", ")
                );
                summarize(&text, label.trim_start())
            }
            Resolution::Apology => {
                warn!(intent = %session.intent, %segment, "knowledge base has no entry");
                self.translator
                    .resolve(PhraseKey::ApologyFallback, locale)
                    .to_string()
            }
            Resolution::Unknown => self
                .translator
                .resolve(PhraseKey::CouldNotUnderstand, locale)
                .to_string(),
        }
    }

    async fn turn_lock(&self, phone: &str) -> Arc<Mutex<()>> {
        let mut locks = self.turn_locks.lock().await;
        locks
            .entry(phone.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

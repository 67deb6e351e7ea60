//! Response dispatcher: normalise, walk the ordered table, render the winner.

use serde::Serialize;
use std::sync::Mutex;
use tracing::debug;

use super::effects::ScheduledEffect;
use super::random::{RandomSource, ThreadRandom};
use super::responses::DEFAULT_POOL;
use super::rules::{default_rules, MatcherRule, NormalizedInput, ResponseText, SiteLinks};
use super::topic::{RuleKind, Topic};

/// Result of classifying one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    /// Tier of the rule that fired
    pub kind: RuleKind,
    /// Topic of the rule that fired
    pub topic: Topic,
    /// Plain display text; escaping is up to the renderer
    pub text: String,
    /// Host action to run after its delay, once the response is delivered
    pub effect: Option<ScheduledEffect>,
    /// Follow-up suggestions
    pub quick_replies: Vec<String>,
    /// What in the input triggered the rule (empty for the default fallback)
    pub evidence: String,
}

/// Ordered first-match classifier over a [`MatcherRule`] table.
///
/// `classify` never mutates the table; the only state it touches is the
/// random source used to pick among pool variants.
pub struct ResponseDispatcher {
    rules: Vec<MatcherRule>,
    rng: Mutex<Box<dyn RandomSource>>,
}

impl Default for ResponseDispatcher {
    fn default() -> Self {
        Self::new(&SiteLinks::default())
    }
}

impl ResponseDispatcher {
    /// Production table with thread-local randomness.
    pub fn new(links: &SiteLinks) -> Self {
        Self::with_random(links, ThreadRandom)
    }

    /// Production table with an injected random source.
    pub fn with_random(links: &SiteLinks, rng: impl RandomSource + 'static) -> Self {
        Self::with_rules(default_rules(links), rng)
    }

    /// Custom table. Order of `rules` is the priority order.
    pub fn with_rules(rules: Vec<MatcherRule>, rng: impl RandomSource + 'static) -> Self {
        Self {
            rules,
            rng: Mutex::new(Box::new(rng)),
        }
    }

    pub fn rules(&self) -> &[MatcherRule] {
        &self.rules
    }

    /// Classify raw user text. Total: unmatched input falls through to the
    /// default pool even when the table has no default rule.
    pub fn classify(&self, raw_text: &str) -> Response {
        let input = NormalizedInput::new(raw_text);
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        for rule in &self.rules {
            if let Some(evidence) = rule.trigger.evaluate(&input) {
                debug!(
                    kind = %rule.kind(),
                    topic = %rule.topic,
                    evidence = %evidence,
                    "Matcher rule fired"
                );
                return Response {
                    kind: rule.kind(),
                    topic: rule.topic,
                    text: rule.text.render(&mut **rng),
                    effect: rule.effect.clone(),
                    quick_replies: rule.quick_replies.iter().map(|s| s.to_string()).collect(),
                    evidence,
                };
            }
        }

        debug!("No rule fired, using built-in default pool");
        Response {
            kind: RuleKind::Default,
            topic: Topic::Help,
            text: ResponseText::OneOf(DEFAULT_POOL).render(&mut **rng),
            effect: None,
            quick_replies: Vec::new(),
            evidence: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::keywords::KeywordSet;
    use crate::dispatcher::random::FixedRandom;

    #[test]
    fn test_first_match_wins() {
        let rules = vec![
            MatcherRule::topic(Topic::Pricing, KeywordSet(&["cost"]), ResponseText::Fixed("first")),
            MatcherRule::topic(Topic::Demo, KeywordSet(&["cost"]), ResponseText::Fixed("second")),
        ];
        let dispatcher = ResponseDispatcher::with_rules(rules, FixedRandom(0));
        let response = dispatcher.classify("what does it cost");
        assert_eq!(response.text, "first");
        assert_eq!(response.topic, Topic::Pricing);
        assert_eq!(response.evidence, "cost");
    }

    #[test]
    fn test_empty_table_still_answers() {
        let dispatcher = ResponseDispatcher::with_rules(vec![], FixedRandom(2));
        let response = dispatcher.classify("anything at all");
        assert_eq!(response.kind, RuleKind::Default);
        assert_eq!(response.text, DEFAULT_POOL[2]);
        assert!(response.effect.is_none());
    }

    #[test]
    fn test_classify_does_not_touch_the_table() {
        let dispatcher = ResponseDispatcher::with_random(&SiteLinks::default(), FixedRandom(0));
        let before = dispatcher.rules().to_vec();
        dispatcher.classify("how much does this cost?");
        dispatcher.classify("1");
        assert_eq!(dispatcher.rules(), before.as_slice());
    }
}

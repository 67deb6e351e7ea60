//! Dispatcher Tests
//!
//! Priority order, fallback pools and end-to-end replies of the production table.

use crate::dispatcher::effects::{NAVIGATE_DELAY, SCROLL_DELAY};
use crate::dispatcher::responses::{self, DEFAULT_POOL, QUESTION_POOL};
use crate::dispatcher::rules::{PORTFOLIO_SECTION, TECH_STACK_SECTION};
use crate::dispatcher::{
    FixedRandom, ResponseDispatcher, RuleKind, ScheduledEffect, SeededRandom, SideEffect, SiteLinks,
    Topic,
};
use std::collections::HashSet;

fn dispatcher() -> ResponseDispatcher {
    ResponseDispatcher::with_random(&SiteLinks::default(), FixedRandom(0))
}

#[cfg(test)]
mod shortcut_tests {
    use super::*;

    #[test]
    fn test_each_shortcut_maps_to_its_action() {
        let d = dispatcher();
        let links = SiteLinks::default();
        let expected = [
            ("1", Topic::Pricing, ScheduledEffect::navigate(links.pricing_path.clone())),
            ("2", Topic::Demo, ScheduledEffect::navigate(links.booking_path.clone())),
            ("3", Topic::Contact, ScheduledEffect::open_contact_form()),
            ("4", Topic::Portfolio, ScheduledEffect::scroll_to(PORTFOLIO_SECTION)),
            ("5", Topic::TechStack, ScheduledEffect::scroll_to(TECH_STACK_SECTION)),
        ];

        for (input, topic, effect) in expected {
            let response = d.classify(input);
            assert_eq!(response.kind, RuleKind::NumericShortcut, "kind for '{}'", input);
            assert_eq!(response.topic, topic, "topic for '{}'", input);
            assert_eq!(response.effect, Some(effect), "effect for '{}'", input);
        }
    }

    #[test]
    fn test_bracketed_shortcut_is_the_same_shortcut() {
        let d = dispatcher();
        for n in 1..=5 {
            let plain = d.classify(&n.to_string());
            let bracketed = d.classify(&format!("[{}]", n));
            assert_eq!(plain, bracketed, "shortcut {}", n);
        }
    }

    #[test]
    fn test_shortcut_beats_every_other_keyword() {
        let d = dispatcher();
        let response = d.classify("1 but also pricing help");
        assert_eq!(response.kind, RuleKind::NumericShortcut);
        assert_eq!(response.text, responses::SHORTCUT_PRICING);

        // tone and topic words after the digit change nothing
        let response = d.classify("3 bro this is so damn expensive!!!");
        assert_eq!(response.kind, RuleKind::NumericShortcut);
        assert_eq!(response.topic, Topic::Contact);
    }

    #[test]
    fn test_leading_number_is_read_as_shortcut() {
        // only the first token is checked, so a count at the start still navigates
        let response = dispatcher().classify("5 pages please, how much?");
        assert_eq!(response.kind, RuleKind::NumericShortcut);
        assert_eq!(response.topic, Topic::TechStack);
        assert_eq!(response.effect, Some(ScheduledEffect::scroll_to(TECH_STACK_SECTION)));

        // a number later in the text is not a shortcut
        let response = dispatcher().classify("about 5 pages, how much?");
        assert_eq!(response.topic, Topic::Pricing);
    }

    #[test]
    fn test_out_of_range_numbers_are_not_shortcuts() {
        let d = dispatcher();
        for input in ["0", "6", "12", "[7]"] {
            assert_ne!(d.classify(input).kind, RuleKind::NumericShortcut, "'{}'", input);
        }
    }
}

#[cfg(test)]
mod ordering_tests {
    use super::*;

    #[test]
    fn test_casual_compound_beats_generic_pricing() {
        let response = dispatcher().classify("bro this seems expensive");
        assert_eq!(response.kind, RuleKind::ToneCompound);
        assert_eq!(response.text, responses::CASUAL_PRICING);
        assert_eq!(response.evidence, "casual+expensive");
    }

    #[test]
    fn test_coarse_compound_beats_casual_compound() {
        let response = dispatcher().classify("bro this is damn expensive");
        assert_eq!(response.kind, RuleKind::ToneCompound);
        assert_eq!(response.text, responses::COARSE_PRICING);
    }

    #[test]
    fn test_casual_speed_beats_timeline_topic() {
        let response = dispatcher().classify("can u do it fast");
        assert_eq!(response.kind, RuleKind::ToneCompound);
        assert_eq!(response.topic, Topic::Timeline);
        assert_eq!(response.text, responses::CASUAL_TIMELINE);

        let response = dispatcher().classify("can you do it fast");
        assert_eq!(response.kind, RuleKind::Topic);
        assert_eq!(response.text, responses::TIMELINE);
    }

    #[test]
    fn test_hyped_demo_navigates_to_booking() {
        let response = dispatcher().classify("I want a demo!");
        assert_eq!(response.kind, RuleKind::ToneCompound);
        assert_eq!(response.text, responses::HYPED_DEMO);
        assert_eq!(
            response.effect,
            Some(ScheduledEffect::navigate(SiteLinks::default().booking_path))
        );
    }

    #[test]
    fn test_topic_beats_question_fallback() {
        let response = dispatcher().classify("what services do you offer?");
        assert_eq!(response.kind, RuleKind::Topic);
        assert_eq!(response.topic, Topic::Services);
        assert_eq!(response.effect, Some(ScheduledEffect::scroll_to("services")));
    }

    #[test]
    fn test_keywords_match_at_word_start_only() {
        // "hi" inside "this" must not trigger the greeting
        let response = dispatcher().classify("this thing");
        assert_eq!(response.kind, RuleKind::Default);

        // "sup" inside "support" is not a casual greeting
        let response = dispatcher().classify("bro i need support");
        assert_ne!(response.topic, Topic::Greeting);
    }

    #[test]
    fn test_inflected_keywords_reach_their_topic() {
        let d = dispatcher();
        let cases = [
            ("do you have demos?", Topic::Demo),
            ("can we talk about scheduling", Topic::Demo),
            ("show me a project you built", Topic::Portfolio),
            ("any examples of shops?", Topic::Portfolio),
            ("can i get emailed details", Topic::Contact),
            ("which technologies do you use", Topic::TechStack),
            ("what are your payment options", Topic::Payment),
            ("are you available next month", Topic::When),
        ];

        for (input, topic) in cases {
            let response = d.classify(input);
            assert_eq!(response.kind, RuleKind::Topic, "kind for '{}'", input);
            assert_eq!(response.topic, topic, "topic for '{}'", input);
        }
    }

    #[test]
    fn test_default_quick_questions_reach_their_topic() {
        let d = dispatcher();
        let expected = [
            Topic::Pricing,
            Topic::Demo,
            Topic::Services,
            Topic::Timeline,
            Topic::Portfolio,
            Topic::Contact,
        ];
        for (question, topic) in responses::DEFAULT_QUICK_QUESTIONS.iter().zip(expected) {
            assert_eq!(d.classify(question).topic, topic, "topic for '{}'", question);
        }
    }
}

#[cfg(test)]
mod fallback_tests {
    use super::*;

    #[test]
    fn test_unrecognised_input_uses_default_pool() {
        for i in 0..DEFAULT_POOL.len() {
            let d = ResponseDispatcher::with_random(&SiteLinks::default(), FixedRandom(i));
            let response = d.classify("purple elephants dancing");
            assert_eq!(response.kind, RuleKind::Default);
            assert_eq!(response.text, DEFAULT_POOL[i]);
            assert!(response.effect.is_none());
        }
        assert_eq!(DEFAULT_POOL.len(), 4);
    }

    #[test]
    fn test_default_pool_varies_between_calls() {
        let d = ResponseDispatcher::with_random(&SiteLinks::default(), SeededRandom::new(42));
        let seen: HashSet<String> = (0..64)
            .map(|_| d.classify("purple elephants dancing").text)
            .collect();

        assert!(seen.len() > 1, "expected more than one pool member");
        assert!(seen.iter().all(|t| DEFAULT_POOL.contains(&t.as_str())));
    }

    #[test]
    fn test_interrogative_without_topic_uses_question_pool() {
        let d = dispatcher();
        for input in [
            "what is the meaning of life",
            "how tall is the moon",
            "can you juggle",
            "do you like jazz",
        ] {
            let response = d.classify(input);
            assert_eq!(response.kind, RuleKind::Question, "'{}'", input);
            assert!(QUESTION_POOL.contains(&response.text.as_str()));
        }
    }

    #[test]
    fn test_never_fails_on_odd_input() {
        let d = dispatcher();
        let long = "zz ".repeat(10_000);
        for input in ["🦀🦀🦀", "\u{0}", long.as_str(), "<script>alert(1)</script>", "ÄÖÜ ß"] {
            let response = d.classify(input);
            assert!(!response.text.is_empty());
        }
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_classification_is_idempotent_with_fixed_randomness() {
        let d = dispatcher();
        for input in ["hello", "purple elephants", "what now", "thanks", "1"] {
            assert_eq!(d.classify(input), d.classify(input), "'{}'", input);
        }
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let d = dispatcher();
        let loud = d.classify("  PRICING  ");
        let quiet = d.classify("pricing");
        assert_eq!(loud.topic, quiet.topic);
        assert_eq!(loud.kind, quiet.kind);
        assert_eq!(loud, quiet);
    }

    #[test]
    fn test_scenario_pricing_question() {
        let response = dispatcher().classify("How much does this cost?");
        assert_eq!(response.topic, Topic::Pricing);
        assert!(response.text.contains("pricing calculator"));
        assert!(response.text.contains("$2,500"));

        let effect = response.effect.expect("pricing navigates");
        assert_eq!(
            effect.effect,
            SideEffect::Navigate {
                path: "/pricing.html".to_string()
            }
        );
        assert_eq!(effect.delay, NAVIGATE_DELAY);
    }

    #[test]
    fn test_scenario_demo_shortcut() {
        let response = dispatcher().classify("2");
        let effect = response.effect.expect("demo shortcut navigates");
        assert_eq!(
            effect.effect,
            SideEffect::Navigate {
                path: "/book-demo.html".to_string()
            }
        );
        assert_eq!(effect.delay, NAVIGATE_DELAY);
    }

    #[test]
    fn test_scroll_effects_use_scroll_delay() {
        let response = dispatcher().classify("show me your portfolio");
        assert_eq!(response.effect.map(|e| e.delay), Some(SCROLL_DELAY));
    }

    #[test]
    fn test_dispatcher_output_is_not_escaped() {
        let response = dispatcher().classify("what's your tech stack");
        assert!(response.text.contains('•'));
        assert!(!response.text.contains("&amp;"));
    }
}

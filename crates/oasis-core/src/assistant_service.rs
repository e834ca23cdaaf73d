//! ZENO: keyword intent routing over a fixed table of canned replies.

use std::{thread, time::Duration};

use tracing::debug;

use oasis_domain::{
    AssistantContext, AssistantReply, Intent, Message, NavigationAction, SuggestedAction,
};

const CARD_ICON: &str = "💳";
const CHART_ICON: &str = "📊";
const PIN_ICON: &str = "📍";
const WARNING_ICON: &str = "⚠️";

/// How a keyword is located in lower-cased message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    /// Anywhere in the text.
    Phrase(&'static str),
    /// The entire message and nothing else.
    Exact(&'static str),
    /// The start of a word ("eat" matches "eating", not "weather").
    Stem(&'static str),
}

impl Keyword {
    fn matches(self, text: &str) -> bool {
        match self {
            Keyword::Phrase(needle) => text.contains(needle),
            Keyword::Exact(needle) => text == needle,
            Keyword::Stem(needle) => text
                .match_indices(needle)
                .any(|(start, _)| starts_word(text, start)),
        }
    }
}

fn starts_word(text: &str, index: usize) -> bool {
    text[..index]
        .chars()
        .next_back()
        .map_or(true, |ch| !ch.is_alphanumeric())
}

const BALANCE_KEYWORDS: &[Keyword] = &[
    Keyword::Phrase("balance"),
    Keyword::Phrase("ebt"),
    Keyword::Phrase("snap"),
    Keyword::Phrase("card"),
];

const FOOD_KEYWORDS: &[Keyword] = &[
    Keyword::Phrase("food"),
    Keyword::Phrase("hungry"),
    Keyword::Stem("eat"),
    Keyword::Phrase("pantry"),
    Keyword::Phrase("running out"),
];

const SHUTDOWN_KEYWORDS: &[Keyword] = &[
    Keyword::Phrase("shutdown"),
    Keyword::Phrase("government"),
    Keyword::Phrase("disruption"),
];

const BUDGET_KEYWORDS: &[Keyword] = &[
    Keyword::Phrase("budget"),
    Keyword::Phrase("money"),
    Keyword::Phrase("stretch"),
    Keyword::Phrase("save"),
];

/// `hi` counts only when followed by a space or as the whole message.
const HELLO_KEYWORDS: &[Keyword] = &[
    Keyword::Phrase("hello"),
    Keyword::Phrase("hi "),
    Keyword::Phrase("hey"),
    Keyword::Exact("hi"),
];

fn keywords(intent: Intent) -> &'static [Keyword] {
    match intent {
        Intent::Balance => BALANCE_KEYWORDS,
        Intent::Food => FOOD_KEYWORDS,
        Intent::Shutdown => SHUTDOWN_KEYWORDS,
        Intent::Budget => BUDGET_KEYWORDS,
        Intent::Hello => HELLO_KEYWORDS,
    }
}

/// Simulated network latency applied before a reply is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseLatency {
    pub matched: Duration,
    pub fallback: Duration,
}

impl ResponseLatency {
    pub const fn none() -> Self {
        Self {
            matched: Duration::ZERO,
            fallback: Duration::ZERO,
        }
    }

    pub fn from_millis(matched: u64, fallback: u64) -> Self {
        Self {
            matched: Duration::from_millis(matched),
            fallback: Duration::from_millis(fallback),
        }
    }
}

impl Default for ResponseLatency {
    fn default() -> Self {
        Self::from_millis(800, 1000)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AssistantService {
    latency: ResponseLatency,
}

impl AssistantService {
    pub fn new(latency: ResponseLatency) -> Self {
        Self { latency }
    }


    /// Produces ZENO's reply to `message`. Every input yields a reply; unmatched
    /// text falls back to the generic help message.
    ///
    /// `history` and `context` are accepted for richer routing later and are
    /// not consulted today.
    pub fn respond(
        &self,
        message: &str,
        history: &[Message],
        context: &AssistantContext,
    ) -> AssistantReply {
        let intent = Self::detect_intent(message);
        debug!(
            intent = ?intent,
            history_len = history.len(),
            location = %context.location,
            "routing assistant message"
        );
        let (reply, delay) = match intent {
            Some(intent) => (Self::canned_reply(intent), self.latency.matched),
            None => (Self::fallback_reply(), self.latency.fallback),
        };
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        reply
    }

    /// Classifies `message` by testing categories in priority order
    /// (balance, food, shutdown, budget, hello); the first hit wins.
    pub fn detect_intent(message: &str) -> Option<Intent> {
        let lowered = message.to_lowercase();
        Intent::PRIORITY.into_iter().find(|intent| {
            keywords(*intent)
                .iter()
                .any(|keyword| keyword.matches(&lowered))
        })
    }

    pub fn canned_reply(intent: Intent) -> AssistantReply {
        match intent {
            Intent::Balance => reply(
                "I can help you check your EBT balance! You currently have $127.43 remaining, with 23 days until your next refill. That means you have about $5.54 per day to work with.\n\nWould you like me to help you create a budget plan to make your benefits last?",
                vec![
                    action("View Full Balance", NavigationAction::NavigateBalance, CARD_ICON),
                    action("Get Budget Help", NavigationAction::NavigateBudget, CHART_ICON),
                ],
            ),
            Intent::Food => reply(
                "I understand you need food assistance. Don't worry - there are several resources in Jackson that can help you right now.\n\nThe West Tennessee Food Bank is open today until 4 PM and has good stock of fresh produce, protein, and non-perishables. They're located at 562 Airways Blvd and don't require an appointment.\n\nWould you like me to show you all the food pantries near you?",
                vec![
                    action("Find Food Banks", NavigationAction::NavigateMap, PIN_ICON),
                    action("Check My Balance", NavigationAction::NavigateBalance, CARD_ICON),
                ],
            ),
            Intent::Shutdown => reply(
                "Great question. Right now, the government shutdown risk is LOW (15%). The current funding deadline is 45 days away, and Congress recently reached a bipartisan agreement.\n\nHowever, it's always smart to prepare. I recommend stocking up on non-perishables, knowing where your nearest food pantries are, and saving a small emergency fund if possible.\n\nWould you like to see the full shutdown risk dashboard?",
                vec![
                    action("View Shutdown Risk", NavigationAction::NavigateShutdown, WARNING_ICON),
                    action("Find Food Pantries", NavigationAction::NavigateMap, PIN_ICON),
                ],
            ),
            Intent::Budget => reply(
                "I'd be happy to help you budget! With your current balance of $127.43 and 23 days until refill, you have about $5.54 per day.\n\nHere are some quick tips:\n• Shop at Dollar General or Family Dollar for basics\n• Buy store brands instead of name brands\n• Stock up on rice, beans, pasta - they're filling and cheap\n• Check food bank hours - it's okay to use them!\n\nWould you like me to create a detailed meal plan for the week?",
                vec![
                    action("Get Smart Budget", NavigationAction::NavigateBudget, CHART_ICON),
                    action("Find Cheap Stores", NavigationAction::NavigateMap, PIN_ICON),
                ],
            ),
            Intent::Hello => reply(
                "Hello! I'm ZENO, your personal assistant for navigating SNAP benefits and finding resources in Jackson. I'm here to help you make the most of your benefits, find food when you need it, and plan ahead.\n\nHow can I help you today? You can ask me about your EBT balance, food pantries, budget tips, or anything else related to getting assistance.",
                default_actions(),
            ),
        }
    }

    pub fn fallback_reply() -> AssistantReply {
        reply(
            "That's a great question! While I'm still learning, I can help you with:\n\n• Checking your EBT balance and transaction history\n• Finding food pantries and emergency food in Jackson\n• Creating a budget to make your benefits last\n• Understanding government shutdown risks\n\nWhat would you like help with?",
            vec![
                action("Check Balance", NavigationAction::NavigateBalance, CARD_ICON),
                action("Find Food", NavigationAction::NavigateMap, PIN_ICON),
                action("Budget Help", NavigationAction::NavigateBudget, CHART_ICON),
            ],
        )
    }

    /// Opening message of a new conversation.
    pub fn greeting() -> AssistantReply {
        reply(
            "Hi! I'm ZENO, your personal assistant for SNAP benefits and community resources. I'm here to help you check your EBT balance, find food pantries in Jackson, budget your benefits, and prepare for any government changes.\n\nHow can I help you today?",
            default_actions(),
        )
    }

    /// Shown in place of a reply when one cannot be produced.
    pub fn connection_error_reply() -> AssistantReply {
        reply(
            "I'm sorry, I'm having trouble connecting right now. Please try again in a moment.",
            Vec::new(),
        )
    }

    pub fn conversation_starters() -> &'static [&'static str] {
        &[
            "What's my EBT balance?",
            "I'm running out of food",
            "Help me budget my benefits",
            "What if there's a government shutdown?",
        ]
    }
}

fn reply(content: &str, suggested_actions: Vec<SuggestedAction>) -> AssistantReply {
    AssistantReply {
        content: content.to_string(),
        suggested_actions,
    }
}

fn action(label: &str, target: NavigationAction, icon: &str) -> SuggestedAction {
    SuggestedAction::new(label, target, Some(icon))
}

fn default_actions() -> Vec<SuggestedAction> {
    vec![
        action("Check My Balance", NavigationAction::NavigateBalance, CARD_ICON),
        action("Find Food Banks", NavigationAction::NavigateMap, PIN_ICON),
        action("Budget Help", NavigationAction::NavigateBudget, CHART_ICON),
    ]
}

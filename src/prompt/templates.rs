//! The four fixed prompts of the tone workflow.
//!
//! Each one is a system instruction followed by a user turn holding the
//! `message` input.

use super::types::{ChatTurn, PromptSpec};

/// Name of the single workflow input every template reads.
pub const MESSAGE_VARIABLE: &str = "message";

const DETECT_TONE_SYSTEM: &str = "\
You will be given a message and you need to detect the tone of the message.

The tone can be one of the following:
- happy
- sad
- angry


Only respond with one of those three tones and nothing more.
";

const BE_HAPPY_SYSTEM: &str = "\
You will be given a message from the user that is already categorized as happy.

Partake in the user's happiness with some happiness of your own.
";

const CHEER_UP_SYSTEM: &str = "\
You will be given a message from the user that is already categorized as sad.

Offer some words of encouragement and support.
";

const SETTLE_DOWN_SYSTEM: &str = "\
You will be given a message from the user that is already categorized as angry.

Give a short, concise response that helps the user calm down.
";

fn system_then_message(name: &str, system: &str) -> PromptSpec {
    PromptSpec::new(
        name,
        vec![
            ChatTurn::system(system),
            ChatTurn::user_variable(MESSAGE_VARIABLE),
        ],
    )
}

pub fn detect_tone() -> PromptSpec {
    system_then_message("detect_tone", DETECT_TONE_SYSTEM)
}

pub fn be_happy() -> PromptSpec {
    system_then_message("be_happy", BE_HAPPY_SYSTEM)
}

pub fn cheer_up() -> PromptSpec {
    system_then_message("cheer_up", CHEER_UP_SYSTEM)
}

pub fn settle_down() -> PromptSpec {
    system_then_message("settle_down", SETTLE_DOWN_SYSTEM)
}

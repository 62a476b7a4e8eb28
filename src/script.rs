//! The scenario script: narrative sentences and feature captions.
//!
//! Constant configuration consumed by the UI layer and, for sentence
//! counts, by the program builders. The sequencer core never reads the
//! text itself.

/// One scenario step's narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryStep {
    /// One or two sentences, faded between during the step.
    pub sentences: &'static [&'static str],
    /// Feature-description caption shown under the narrative.
    pub caption: &'static str,
}

impl StoryStep {
    /// Whether this step switches to a second sentence mid-animation.
    #[must_use]
    pub fn has_second_sentence(&self) -> bool {
        self.sentences.len() > 1
    }

    /// Sentence at `index`, or an empty string past the end.
    #[must_use]
    pub fn sentence(&self, index: usize) -> &'static str {
        self.sentences.get(index).copied().unwrap_or("")
    }
}

/// The full seven-step scenario.
pub const SCRIPT: [StoryStep; 7] = [
    StoryStep {
        sentences: &[""],
        caption: "",
    },
    StoryStep {
        sentences: &[
            "There is a zero day vulnerability on a third party library a \
             web application is using.",
            "An attacker is aware of this exploit and that a web \
             application uses the library.",
        ],
        caption: "Runtime attack detection and response. Visibility right \
                  into the application layer, uncovering zero-day attacks.",
    },
    StoryStep {
        sentences: &[
            "The attacker targets the vulnerable web application and sends \
             a SQL injection attack.",
            "The attack bypasses the WAF and reaches the database and \
             executes the SQL injection.",
        ],
        caption: "See attacks on applications. Get real-time alerts that \
                  include crucial context and fewer false positives with \
                  enhanced attack intelligence and integrations with SIEM, \
                  CNAPP and XDR platforms.",
    },
    StoryStep {
        sentences: &[
            "The sensor detects the attack inside the application layer.",
            "An alert is generated and sent to the SOC in real time.",
        ],
        caption: "Guided security runbooks. Clear, actionable steps to \
                  quickly identify true positive attacks and contain \
                  threats.",
    },
    StoryStep {
        sentences: &[
            "A security analyst begins investigation, confirms the attack, \
             and blocks it.",
        ],
        caption: "One-click response actions. Block attackers at the \
                  application layer without waiting on upstream rule \
                  changes.",
    },
    StoryStep {
        sentences: &[
            "Now that the attack is blocked and the web application is \
             safe, an issue is created for the developer to make a code \
             fix.",
            "The developer is armed with the library information and stack \
             trace to apply the fix, making the application more secure.",
        ],
        caption: "Guided developer runbooks. Clear, actionable steps to \
                  quickly fix vulnerable code and libraries.",
    },
    StoryStep {
        sentences: &[
            "The attacker is shut out and the application keeps serving \
             traffic safely.",
        ],
        caption: "Continuous protection. The application keeps running \
                  while the fix ships.",
    },
];

/// Number of steps in the scenario.
pub const STEP_COUNT: usize = SCRIPT.len();

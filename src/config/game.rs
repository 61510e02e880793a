use serde::{Deserialize, Serialize};

/// Animation stage lengths in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationTimings {
    pub car_drive: u64,
    pub person_fall: u64,
    /// Pause after the fall before step 1 appears.
    pub impact_hold: u64,
    pub box_close: u64,
    pub ambulance_approach: u64,
    pub ambulance_arrive: u64,
    pub medic_walk: u64,
    pub person_lift: u64,
    pub carry: u64,
    pub ambulance_leave: u64,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            car_drive: 3800,
            person_fall: 700,
            impact_hold: 300,
            box_close: 900,
            ambulance_approach: 9000,
            ambulance_arrive: 7200,
            medic_walk: 1700,
            person_lift: 700,
            carry: 2100,
            ambulance_leave: 4000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneAnswer {
    pub text: String,
    pub correct: bool,
    pub response: String,
}

/// Dial pad and dispatcher dialogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneConfig {
    pub emergency_number: String,
    pub max_digits: usize,
    pub keypad_prompt: String,
    pub invalid_message: String,
    pub connected_message: String,
    pub question: String,
    pub answers: Vec<PhoneAnswer>,
    pub retry_label: String,

    pub invalid_hold: u64,
    pub connect_delay: u64,
    pub dispatch_hold: u64,
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            emergency_number: "112".into(),
            max_digits: 6,
            keypad_prompt: "Toets noodnummer:".into(),
            invalid_message: "112 centrale: Ongeldig nummer. Probeer opnieuw.".into(),
            connected_message: "112 centrale: Verbonden. Wat is uw noodmelding?".into(),
            question: "112 centrale: Zijn er gewonden?".into(),
            answers: vec![
                PhoneAnswer {
                    text: "Ja, een persoon is aangereden".into(),
                    correct: true,
                    response: "112 centrale: Een ambulance wordt gestuurd.".into(),
                },
                PhoneAnswer {
                    text: "Nee, alleen blikschade".into(),
                    correct: false,
                    response: "112 centrale: De centralist stuurt geen ambulance.".into(),
                },
            ],
            retry_label: "Opnieuw proberen".into(),

            invalid_hold: 1200,
            connect_delay: 600,
            dispatch_hold: 800,
        }
    }
}

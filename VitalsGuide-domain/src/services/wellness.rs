use rand::seq::SliceRandom;
use rand::Rng;

/// Mental wellness micro-coaching tips
pub const WELLNESS_TIPS: [&str; 5] = [
    "Take 5 deep breaths: inhale 4 sec, hold 4 sec, exhale 6 sec.",
    "Write down one thing you're grateful for today.",
    "Go for a 5-min walk to refresh your mood.",
    "Take a 10-min break from screens and stretch.",
    "Listen to calming music for 3 minutes.",
];

/// Pick a tip uniformly at random using the given generator
pub fn pick_tip<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    WELLNESS_TIPS
        .choose(rng)
        .copied()
        .unwrap_or(WELLNESS_TIPS[0])
}

/// Pick a tip with the thread-local generator
pub fn random_tip() -> &'static str {
    pick_tip(&mut rand::thread_rng())
}

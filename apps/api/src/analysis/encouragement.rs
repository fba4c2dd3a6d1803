//! Motivational quotes. Randomly chosen, so kept out of `AnalysisReport`:
//! the report itself must stay identical across repeated runs.

use rand::seq::IndexedRandom;

pub const QUOTES: &[&str] = &[
    "Your resume is your personal marketing document. Make it shine!",
    "Every expert was once a beginner. Keep learning, keep growing!",
    "The job market is competitive, but so are you!",
    "Your potential is limitless. Let your resume tell that story!",
    "Success is not final, failure is not fatal. Keep pushing forward!",
    "Your resume is the first impression. Make it count!",
    "Dream big, work hard, stay focused. Your dream job awaits!",
    "Every setback is a setup for a comeback. Never give up!",
    "The only way to do great work is to love what you do!",
    "Your resume is not just a document, it's your career story!",
];

pub fn pick_quote() -> &'static str {
    QUOTES.choose(&mut rand::rng()).copied().unwrap_or(QUOTES[0])
}

//! Keyword-based help assistant for students looking for a tutor.

struct Rule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

// First matching rule wins.
const RULES: &[Rule] = &[
    Rule {
        keywords: &["math", "mathematics"],
        reply: "I can help you find math tutors! We have tutors specializing in algebra, calculus, geometry, and more. What specific math topic are you looking for?",
    },
    Rule {
        keywords: &["science"],
        reply: "Great choice! We have excellent science tutors covering physics, chemistry, biology, and more. What science subject interests you?",
    },
    Rule {
        keywords: &["english", "language"],
        reply: "Perfect! Our English tutors can help with grammar, literature, writing, and language skills. What specific area do you need help with?",
    },
    Rule {
        keywords: &["price", "cost"],
        reply: "Our tutors set their own rates, typically ranging from $20-50 per hour. You can see individual pricing on each tutor's profile.",
    },
    Rule {
        keywords: &["location", "where"],
        reply: "We have tutors available both online and in-person. You can filter by location to find tutors near you.",
    },
];

const FALLBACK_REPLY: &str = "I'm here to help you find the perfect tutor! You can search by subject, location, or ask me about specific topics like math, science, or English.";

/// Reply to a free-form question
pub fn reply(message: &str) -> &'static str {
    let message = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| message.contains(keyword)))
        .map_or(FALLBACK_REPLY, |rule| rule.reply)
}

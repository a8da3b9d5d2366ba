//! Prompt templates.
//!
//! Every function here is a pure rendering of its inputs into a fixed
//! template. The JSON contracts embedded in the prompts are the shapes the
//! response types in `pulse_core::responses` decode.

use std::fmt::Write as _;

use pulse_core::aggregate::AttemptStats;
use pulse_core::entities::{AttemptDetail, MasteryWithTopic, Profile, Topic, WeakSpotWithTopic};
use pulse_core::enums::LearningFormat;

/// Question text is cut to this many characters in the analysis prompt.
const QUESTION_EXCERPT_CHARS: usize = 100;

/// Timetable prompts list at most this many weak spots and mastery records.
const TIMETABLE_LIST_LIMIT: usize = 5;

pub const ANALYST_SYSTEM_PROMPT: &str = "You are an educational data analyst. Analyze test performance and identify precise learning gaps. Always return valid JSON.";

pub const SCHEDULER_SYSTEM_PROMPT: &str = "You are an expert educational scheduler. Create optimal study timetables based on learning science principles. Always return valid JSON.";

pub const RECALL_SYSTEM_PROMPT: &str = "You are an expert at creating active recall questions. Generate 3 quick questions that force students to recall key information without hints. Questions should be direct, specific, and test understanding not memorization.";

pub const EDUCATOR_SYSTEM_PROMPT: &str = "You are an expert educator skilled in multiple teaching methods. You explain concepts using:

1. FEYNMAN METHOD: Explain like teaching a 5-year-old, breaking down complex ideas into simple language with step-by-step reasoning.
2. MULTIPLE EXPLANATIONS: Provide 2-3 different ways to understand the same concept, each using different angles or mental models.
3. ANALOGIES & REAL-WORLD: Connect abstract concepts to everyday objects and experiences students can relate to.
4. SOLVED EXAMPLES: Show complete exam-type problems with step-by-step solutions and explanation of each step.

Your goal is DEEP UNDERSTANDING, not surface memorization. Make concepts crystal clear.";

const OCR_JSON_CONTRACT: &str = r#"{
  "text": "extracted text here",
  "topics": [
    {
      "name": "Main Topic Name",
      "subject": "Subject Category (e.g., Physics, Math, Biology)",
      "subtopics": ["subtopic 1", "subtopic 2", "subtopic 3"]
    }
  ]
}"#;

fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Weak-spot analysis prompt for a topic with at least one attempt.
#[must_use]
pub fn weak_spot_analysis(topic_name: &str, stats: &AttemptStats, attempts: &[AttemptDetail]) -> String {
    let mut prompt = format!(
        "Analyze these test results for topic \"{topic_name}\":\n\n\
         Total Questions: {total}\n\
         Correct: {correct}\n\
         Accuracy: {accuracy}%\n\
         Average Time: {avg_time}s\n\
         Average Confidence: {avg_confidence}/5\n\n\
         Attempt Details:\n",
        total = stats.total,
        correct = stats.correct,
        accuracy = stats.accuracy,
        avg_time = stats.avg_time,
        avg_confidence = stats.avg_confidence,
    );

    for (i, detail) in attempts.iter().enumerate() {
        let a = &detail.attempt;
        let mark = if a.is_correct == Some(true) { '✓' } else { '✗' };
        let question = detail
            .question_text
            .as_deref()
            .map_or_else(|| "-".to_string(), |q| excerpt(q, QUESTION_EXCERPT_CHARS));
        let _ = writeln!(
            prompt,
            "Q{n}: {mark} | Time: {time}s | Confidence: {confidence}/5 | Question: {question}",
            n = i + 1,
            time = or_dash(a.time_taken),
            confidence = or_dash(a.confidence),
        );
    }

    prompt.push_str(
        r#"
Based on this data, identify 3-5 specific weak spots (concepts) with severity (high/medium/low). Return ONLY valid JSON in this exact format:
{
  "masteryScore": number (0-100),
  "weakSpots": [
    {"concept": "specific concept name", "severity": "high/medium/low", "reason": "why this is weak"}
  ],
  "gaps": ["prerequisite concept 1", "prerequisite concept 2"]
}"#,
    );
    prompt
}

/// Adaptive diagnostic question prompt for a topic.
#[must_use]
pub fn question_generation(topic: &Topic) -> String {
    let subject = topic.subject.as_deref().unwrap_or("General");
    let subtopics = match topic.subtopics.as_deref() {
        Some(list) if !list.is_empty() => list.join(", "),
        _ => "Not specified".to_string(),
    };

    format!(
        r#"Generate 8-12 adaptive diagnostic questions for the topic: "{name}"

Subject: {subject}
Subtopics: {subtopics}

Design questions using Bloom's Taxonomy levels:
- 2-3 REMEMBER/UNDERSTAND (easy): Basic recall and comprehension
- 3-4 APPLY/ANALYZE (medium): Problem-solving and analysis
- 2-3 EVALUATE/CREATE (hard): Critical thinking and synthesis

Requirements:
1. Test prerequisite concepts progressively
2. Each question should force thinking, not guessing
3. Wrong answers should reveal specific misconceptions
4. Include difficulty curve: easy → medium → hard
5. Cover different aspects of the topic

Return ONLY valid JSON array in this exact format:
[
  {{
    "question_text": "Clear, specific question",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "correct_answer": "Exact match from options",
    "difficulty": "easy|medium|hard"
  }}
]

Ensure questions are exam-quality and test true understanding."#,
        name = topic.name,
    )
}

/// Weekly timetable prompt. Lists are expected pre-sorted (weakest first).
#[must_use]
pub fn timetable(
    profile: Option<&Profile>,
    weak_spots: &[WeakSpotWithTopic],
    mastery: &[MasteryWithTopic],
) -> String {
    let class_year = profile
        .and_then(|p| p.class_year.as_deref())
        .unwrap_or("student");
    let school = profile.and_then(|p| p.school.as_deref()).unwrap_or("school");

    let weak_lines = if weak_spots.is_empty() {
        "None".to_string()
    } else {
        weak_spots
            .iter()
            .take(TIMETABLE_LIST_LIMIT)
            .map(|w| {
                // Rows without a resolvable topic fall back to their concept.
                let topic = w.topic_name.as_deref().unwrap_or(&w.weak_spot.concept);
                format!("- {topic} ({} priority)", w.weak_spot.severity)
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mastery_lines = if mastery.is_empty() {
        "None".to_string()
    } else {
        mastery
            .iter()
            .take(TIMETABLE_LIST_LIMIT)
            .map(|m| {
                format!(
                    "- {}: {}% mastery",
                    m.topic_name.as_deref().unwrap_or(&m.record.topic_id),
                    m.record.mastery_score
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"Create an optimal weekly study timetable for a {class_year} at {school}.

Weak Topics (need more time):
{weak_lines}

Topics by Mastery (lowest first):
{mastery_lines}

Requirements:
- Monday-Friday schedule
- Mix of study sessions, revision, and practice
- Prioritize weak topics
- Include breaks and optimal study times (morning/evening)
- Consider retention and spaced repetition

Return ONLY valid JSON array:
[
  {{
    "day_of_week": 1-5 (1=Monday),
    "time_slot": "HH:MM-HH:MM",
    "activity": "specific activity description",
    "duration": minutes,
    "topic_id": "optional topic UUID if specific to a topic"
  }}
]

Create 3-4 time slots per day."#
    )
}

/// Prompt for one text learning format. `Mindmap` renders the short image prompt.
#[must_use]
pub fn learning_format(format: LearningFormat, concept: &str) -> String {
    match format {
        LearningFormat::Feynman => format!(
            "Explain \"{concept}\" using the Feynman Technique. Break it down to simple terms as if teaching a beginner. Use analogies and examples."
        ),
        LearningFormat::Explanation => format!(
            "Provide 3 different detailed explanations of \"{concept}\" - one intuitive, one technical, and one practical with real-world applications."
        ),
        LearningFormat::Analogy => format!(
            "Create 3 powerful analogies to explain \"{concept}\". Each analogy should relate to everyday experiences and make the concept memorable."
        ),
        LearningFormat::Example => format!(
            "Provide a complete step-by-step solved example demonstrating \"{concept}\". Include detailed explanations for each step."
        ),
        LearningFormat::Mindmap => mindmap_image(concept),
    }
}

/// Short mind-map image prompt used alongside learning content.
#[must_use]
pub fn mindmap_image(concept: &str) -> String {
    format!(
        "Create a colorful mind map diagram for the concept \"{concept}\". Use a central node with 4-6 branches showing key sub-concepts. Educational style, clear labels, modern design."
    )
}

/// Detailed mind-map image prompt for the standalone mind-map function.
#[must_use]
pub fn mindmap_detailed(concept: &str, details: &str) -> String {
    format!(
        r#"Create a clear, educational mind map diagram for this concept: "{concept}"

Details: {details}

The mind map should:
- Have the main concept in the center
- Branch out to key subtopics
- Include definitions, formulas, and relationships
- Use colors to differentiate branches
- Be clean, organized, and easy to understand
- Look professional like a textbook diagram

Style: Clean educational diagram with clear labels, professional colors, structured layout."#
    )
}

/// Text extraction prompt for a PDF reachable at `file_url`.
#[must_use]
pub fn ocr_pdf(file_url: &str) -> String {
    format!(
        "This is a PDF document URL: {file_url}

Extract all text content from this PDF. Then identify the main topics and subtopics from the content. Return ONLY valid JSON in this format:
{OCR_JSON_CONTRACT}

Be thorough in extracting all text, including formulas and key concepts."
    )
}

/// Text part of the vision OCR request; the image travels as a separate part.
#[must_use]
pub fn ocr_image() -> String {
    format!(
        "Extract all text from this image. Then identify the main topics and subtopics. Return ONLY valid JSON in this format:
{OCR_JSON_CONTRACT}

Be thorough in extracting all text, including handwritten notes, formulas, and diagrams."
    )
}

/// One-minute active-recall drill prompt.
#[must_use]
pub fn recall_drill(concept: &str, learning_content: &serde_json::Value) -> String {
    let covered = serde_json::to_string_pretty(learning_content).unwrap_or_else(|_| "{}".into());
    format!(
        r#"Create a 1-minute active recall drill for this concept: "{concept}"

Learning content covered:
{covered}

Generate EXACTLY 3 questions that:
1. Test core understanding (no hints)
2. Require recall from memory
3. Can be answered in 20-30 seconds each
4. Cover different aspects of the concept

Return ONLY valid JSON in this format:
{{
  "questions": [
    {{
      "question": "Direct question without hints",
      "expectedAnswer": "Key points the student should recall",
      "difficulty": "easy|medium|hard"
    }}
  ],
  "timeLimit": 60
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::aggregate::{AttemptSummary, summarize};
    use pulse_core::entities::{Attempt, MasteryRecord, WeakSpot};
    use pulse_core::enums::Severity;

    fn detail(correct: bool, time: Option<f64>, question: Option<&str>) -> AttemptDetail {
        AttemptDetail {
            attempt: Attempt {
                id: "a".into(),
                user_id: "u".into(),
                question_id: "q".into(),
                answer: None,
                is_correct: Some(correct),
                time_taken: time,
                confidence: Some(4.0),
                attempted_at: None,
            },
            question_text: question.map(String::from),
        }
    }

    fn topic(subject: Option<&str>, subtopics: Option<Vec<&str>>) -> Topic {
        Topic {
            id: "t1".into(),
            user_id: "u".into(),
            name: "Thermodynamics".into(),
            subject: subject.map(String::from),
            subtopics: subtopics.map(|v| v.into_iter().map(String::from).collect()),
            note_id: None,
            created_at: None,
        }
    }

    #[test]
    fn analysis_prompt_renders_stats_and_lines() {
        let long_question = "x".repeat(150);
        let details = vec![
            detail(true, Some(12.0), Some("What is entropy?")),
            detail(false, None, Some(&long_question)),
        ];
        let attempts: Vec<_> = details.iter().map(|d| d.attempt.clone()).collect();
        let AttemptSummary::Stats(stats) = summarize(&attempts) else {
            panic!("expected stats");
        };

        let prompt = weak_spot_analysis("Thermodynamics", &stats, &details);
        assert!(prompt.contains("topic \"Thermodynamics\""));
        assert!(prompt.contains("Total Questions: 2"));
        assert!(prompt.contains("Correct: 1"));
        assert!(prompt.contains("Accuracy: 50%"));
        assert!(prompt.contains("Average Time: 6s"));
        assert!(prompt.contains("Average Confidence: 4/5"));
        assert!(prompt.contains("Q1: ✓ | Time: 12s | Confidence: 4/5 | Question: What is entropy?"));
        assert!(prompt.contains(&format!("Q2: ✗ | Time: -s | Confidence: 4/5 | Question: {}\n", "x".repeat(100))));
        assert!(prompt.contains("\"masteryScore\""));
    }

    #[test]
    fn question_prompt_defaults() {
        let prompt = question_generation(&topic(None, None));
        assert!(prompt.contains("Subject: General"));
        assert!(prompt.contains("Subtopics: Not specified"));

        let prompt = question_generation(&topic(Some("Physics"), Some(vec!["Heat", "Work"])));
        assert!(prompt.contains("Subject: Physics"));
        assert!(prompt.contains("Subtopics: Heat, Work"));
        assert!(prompt.contains("\"question_text\""));
    }

    #[test]
    fn timetable_prompt_without_data() {
        let prompt = timetable(None, &[], &[]);
        assert!(prompt.contains("for a student at school."));
        assert!(prompt.contains("Weak Topics (need more time):\nNone"));
        assert!(prompt.contains("Topics by Mastery (lowest first):\nNone"));
    }

    #[test]
    fn timetable_prompt_limits_lists() {
        let weak: Vec<_> = (0..7)
            .map(|i| WeakSpotWithTopic {
                weak_spot: WeakSpot {
                    id: format!("w{i}"),
                    user_id: "u".into(),
                    topic_id: None,
                    concept: format!("concept {i}"),
                    severity: Severity::High,
                    identified_at: None,
                },
                topic_name: Some(format!("Topic {i}")),
            })
            .collect();
        let mastery = vec![MasteryWithTopic {
            record: MasteryRecord {
                user_id: "u".into(),
                topic_id: "t1".into(),
                mastery_score: 35.0,
                accuracy: None,
                avg_time: None,
                last_practiced: None,
            },
            topic_name: Some("Algebra".into()),
        }];
        let profile = Profile {
            id: "u".into(),
            name: "Ada".into(),
            school: Some("Hill High".into()),
            class_year: Some("Year 11 student".into()),
        };

        let prompt = timetable(Some(&profile), &weak, &mastery);
        assert!(prompt.contains("for a Year 11 student at Hill High."));
        assert!(prompt.contains("- Topic 4 (high priority)"));
        assert!(!prompt.contains("Topic 5"));
        assert!(!prompt.contains("concept"));
        assert!(prompt.contains("- Algebra: 35% mastery"));
    }

    #[test]
    fn educator_prompt_closes_with_goal() {
        assert!(EDUCATOR_SYSTEM_PROMPT.starts_with("You are an expert educator"));
        assert!(EDUCATOR_SYSTEM_PROMPT.ends_with(
            "Your goal is DEEP UNDERSTANDING, not surface memorization. Make concepts crystal clear."
        ));
    }

    #[test]
    fn learning_prompts_mention_concept() {
        for format in LearningFormat::TEXT_FORMATS {
            assert!(learning_format(format, "Osmosis").contains("\"Osmosis\""));
        }
        assert!(learning_format(LearningFormat::Feynman, "Osmosis").contains("Feynman Technique"));
    }

    #[test]
    fn ocr_prompts_embed_contract() {
        let pdf = ocr_pdf("https://files.example/notes.pdf");
        assert!(pdf.contains("https://files.example/notes.pdf"));
        assert!(pdf.contains("\"subtopics\""));
        assert!(ocr_image().contains("handwritten notes"));
    }

    #[test]
    fn recall_prompt_pretty_prints_content() {
        let prompt = recall_drill("Osmosis", &serde_json::json!({"feynman": "water moves"}));
        assert!(prompt.contains("\"feynman\": \"water moves\""));
        assert!(prompt.contains("\"timeLimit\": 60"));
    }
}

/// Keyword-routed tutor replies used when no inference backend is available.
pub struct ChatService;

const MATH_KEYWORDS: [&str; 4] = ["math", "calculate", "equation", "formula"];
const HISTORY_KEYWORDS: [&str; 4] = ["history", "date", "event", "war"];
const SCIENCE_KEYWORDS: [&str; 4] = ["science", "physics", "chemistry", "biology"];
const STUDY_KEYWORDS: [&str; 4] = ["study", "learn", "remember", "memorize"];
const EXAM_KEYWORDS: [&str; 3] = ["exam", "test", "quiz"];

impl ChatService {
    pub fn fallback_response(message: &str) -> String {
        let msg = message.to_lowercase();

        let reply = if Self::mentions(&msg, &MATH_KEYWORDS) {
            "For math problems, break them down step by step. First identify what you're \
             solving for, list the given values, then apply the appropriate formula. Would \
             you like help with a specific problem?"
        } else if Self::mentions(&msg, &HISTORY_KEYWORDS) {
            "When studying history, focus on causes and effects. Create timelines to \
             visualize the sequence of events. Understanding 'why' things happened is more \
             important than just memorizing dates. What specific period are you studying?"
        } else if Self::mentions(&msg, &SCIENCE_KEYWORDS) {
            "Science concepts often build on each other. Make sure you understand the \
             fundamentals first. Use diagrams and practice problems to reinforce your \
             understanding. What specific concept are you working on?"
        } else if Self::mentions(&msg, &STUDY_KEYWORDS) {
            "Effective study techniques include: 1) Spaced repetition - review material over \
             increasing intervals, 2) Active recall - test yourself without looking at notes, \
             3) Teach others - explaining concepts helps solidify understanding. Use the \
             Pomodoro technique: 25 minutes focused study, 5 minute break."
        } else if Self::mentions(&msg, &EXAM_KEYWORDS) {
            "For exam prep: 1) Review past papers and practice questions, 2) Focus on areas \
             where you're weakest, 3) Get enough sleep before the exam, 4) During the test, \
             read questions carefully and manage your time. Start with questions you know \
             well to build confidence."
        } else {
            "I'm here to help with your studies! You can ask me about specific subjects \
             (math, science, history), study techniques, exam preparation, or any concept \
             you're learning. What would you like to know more about?"
        };

        reply.to_string()
    }

    fn mentions(message: &str, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| message.contains(keyword))
    }
}

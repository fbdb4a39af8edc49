mod quiz_vm;

pub use quiz_vm::{QuizIntent, QuizSnapshot, QuizVm, start_quiz};

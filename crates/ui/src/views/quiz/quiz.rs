use dioxus::document::eval;
use dioxus::prelude::*;
use services::{QuizPhase, QuizProgress, QuizResult, RevealPoll};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{QuizIntent, QuizSnapshot, QuizVm, start_quiz};
use super::glyph::GlyphBox;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz();
    let clock = ctx.clock();

    let vm = use_signal({
        let quiz = quiz.clone();
        move || start_quiz(&quiz)
    });

    // Keeps the judged card on screen until the reveal runs out, then moves on.
    let reveal_task = use_callback(move |()| {
        let mut vm = vm;
        spawn(async move {
            loop {
                let poll = match vm.write().as_mut() {
                    Ok(vm) => vm.poll_reveal(clock.now()),
                    Err(_) => RevealPoll::Idle,
                };
                match poll {
                    RevealPoll::Waiting { retry_after } => tokio::time::sleep(retry_after).await,
                    RevealPoll::Advanced { finished } => {
                        tracing::debug!(finished, "reveal over");
                        break;
                    }
                    RevealPoll::Idle => break,
                }
            }
        });
    });

    let dispatch_intent = {
        let quiz = quiz.clone();
        use_callback(move |intent: QuizIntent| {
            let mut vm = vm;
            match intent {
                QuizIntent::Submit => {
                    let started = vm
                        .write()
                        .as_mut()
                        .is_ok_and(|vm| vm.submit(clock.now()));
                    if started {
                        reveal_task.call(());
                    }
                }
                QuizIntent::Stop => {
                    if let Ok(vm) = vm.write().as_mut() {
                        vm.stop();
                    }
                }
                QuizIntent::Restart => {
                    let next = match &*vm.read() {
                        Ok(current) if !current.is_finished() => None,
                        Ok(current) => Some(current.restart(&quiz)),
                        Err(_) => Some(start_quiz(&quiz)),
                    };
                    if let Some(next) = next {
                        vm.set(next);
                    }
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    use_effect(move || {
        let answering = vm
            .read()
            .as_ref()
            .is_ok_and(|vm| vm.phase() == QuizPhase::Answering);
        if answering {
            let _ = eval("document.getElementById(\"quiz-answer\")?.focus();");
        }
    });

    let snapshot: Result<QuizSnapshot, ViewError> = match &*vm.read() {
        Ok(vm) => Ok(QuizVm::snapshot(vm)),
        Err(err) => Err(*err),
    };
    let running = matches!(&snapshot, Ok(snapshot) if snapshot.result.is_none());

    rsx! {
        div { class: "page quiz-page",
            header { class: "quiz-header",
                h2 { class: "quiz-title", "Hanzi Quiz" }
                if running {
                    button {
                        class: "btn btn-secondary",
                        id: "quiz-stop",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(QuizIntent::Stop),
                        "Stop"
                    }
                }
            }
            match snapshot {
                Err(err) => rsx! {
                    p { class: "quiz-error", "{err.message()}" }
                },
                Ok(QuizSnapshot { result: Some(result), .. }) => rsx! {
                    FinishedPanel {
                        result,
                        on_restart: move |()| dispatch_intent.call(QuizIntent::Restart),
                    }
                },
                Ok(snapshot) => rsx! {
                    if let Some(display) = snapshot.display {
                        GlyphBox { glyph: display.glyph, color: display.color.css() }
                        p { class: "quiz-feedback", id: "quiz-feedback", "{display.feedback}" }
                        form {
                            class: "quiz-form",
                            onsubmit: move |evt: FormEvent| {
                                evt.prevent_default();
                                dispatch_intent.call(QuizIntent::Submit);
                            },
                            input {
                                class: "quiz-answer",
                                id: "quiz-answer",
                                r#type: "text",
                                placeholder: "Type the meaning and press Enter",
                                autocomplete: "off",
                                value: "{snapshot.answer}",
                                disabled: !display.input_enabled,
                                oninput: move |evt: FormEvent| {
                                    let mut vm = vm;
                                    if let Ok(vm) = vm.write().as_mut() {
                                        vm.set_answer(evt.value());
                                    }
                                },
                            }
                        }
                    }
                    ProgressFooter { progress: snapshot.progress }
                },
            }
        }
    }
}

#[component]
fn ProgressFooter(progress: QuizProgress) -> Element {
    let card_label = format!("Card {} / {}", progress.card_number(), progress.total);
    rsx! {
        footer { class: "quiz-footer",
            span { class: "quiz-footer__item", "{card_label}" }
            span { class: "quiz-footer__item", "Score: {progress.score}" }
        }
    }
}

#[component]
fn FinishedPanel(result: QuizResult, on_restart: EventHandler<()>) -> Element {
    rsx! {
        div { class: "quiz-finished",
            p { class: "quiz-finished__score", id: "quiz-result", "{result}" }
            button {
                class: "btn",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "Restart"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Result<QuizVm, ViewError>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        vm: Signal<Result<QuizVm, ViewError>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Result<QuizVm, ViewError>> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}

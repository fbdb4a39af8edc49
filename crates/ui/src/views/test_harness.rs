use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use hanzi_core::model::{Card, ChapterId, ChapterMap};
use services::{Clock, QuizService};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;
use crate::vm::{QuizIntent, QuizSnapshot};

#[derive(Clone)]
struct TestApp {
    quiz: Arc<QuizService>,
    clock: Clock,
}

impl UiApp for TestApp {
    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for QuizHarnessProps {}

#[component]
fn QuizRouterHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { QuizView {} }
}

pub struct QuizHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl QuizHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn type_answer(&mut self, answer: &str) {
        let mut vm = self.handles.vm();
        self.dom.in_runtime(|| {
            if let Ok(vm) = vm.write().as_mut() {
                vm.set_answer(answer);
            }
        });
        drive_dom(&mut self.dom);
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| {
            vm.read()
                .as_ref()
                .map(|vm| vm.snapshot())
                .expect("quiz started")
        })
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// One chapter of cards; meanings are comma separated.
pub fn chapters(cards: &[(&str, &str)]) -> ChapterMap {
    let mut chapters = ChapterMap::new();
    chapters.insert(
        ChapterId::new(1),
        cards
            .iter()
            .map(|(hanzi, meanings)| Card::new(*hanzi, meanings.split(',')).expect("card"))
            .collect(),
    );
    chapters
}

pub fn setup_quiz_harness(chapters: &ChapterMap, clock: Clock) -> QuizHarness {
    let quiz = Arc::new(QuizService::new(chapters, &[]).expect("quiz service"));
    let handles = QuizTestHandles::default();
    let app = Arc::new(TestApp { quiz, clock });

    let mut harness = QuizHarness {
        dom: VirtualDom::new_with_props(
            QuizRouterHarness,
            QuizHarnessProps {
                app,
                handles: handles.clone(),
            },
        ),
        handles,
    };
    harness.rebuild();
    harness
}

use crate::config::AppConfig;
use crate::loader::{Loader, SharedSource};
use eframe::egui;
use quiz_core::{Answer, Question, QuizBrain, Rating, ScoreSummary, SourceError};
use std::time::{Duration, Instant};

const THEME_COLOR: egui::Color32 = egui::Color32::from_rgb(0x37, 0x53, 0x62);
const ACCENT_COLOR: egui::Color32 = egui::Color32::from_rgb(0x4A, 0x90, 0xA4);
const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(0x4C, 0xAF, 0x50);
const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(0xE7, 0x4C, 0x3C);
const CARD_COLOR: egui::Color32 = egui::Color32::WHITE;
const MUTED_COLOR: egui::Color32 = egui::Color32::from_rgb(0xB0, 0xC4, 0xDE);

const CARD_SIZE: [f32; 2] = [420.0, 280.0];

#[derive(Debug, PartialEq)]
enum Screen {
    Loading,
    Question,
    Feedback { is_right: bool, until: Instant },
    Finished(ScoreSummary),
    Failed(String),
}

pub struct QuizzlerApp {
    quiz: QuizBrain,
    source: SharedSource,
    loader: Loader,
    screen: Screen,
    feedback_delay: Duration,
    ctx: egui::Context,
}

impl QuizzlerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, source: SharedSource, config: &AppConfig) -> Self {
        Self::with_context(cc.egui_ctx.clone(), source, config)
    }

    fn with_context(ctx: egui::Context, source: SharedSource, config: &AppConfig) -> Self {
        let mut app = Self {
            quiz: QuizBrain::default(),
            source,
            loader: Loader::default(),
            screen: Screen::Loading,
            feedback_delay: config.feedback_delay,
            ctx,
        };
        app.fetch_questions();
        app
    }

    fn fetch_questions(&mut self) {
        if self.loader.is_loading() {
            log::debug!("fetch already in flight");
            return;
        }
        self.screen = Screen::Loading;
        self.loader.start(self.source.clone(), self.ctx.clone());
    }

    fn on_batch(&mut self, batch: Result<Vec<Question>, SourceError>) {
        match batch {
            Ok(questions) => {
                log::info!("starting quiz with {} questions", questions.len());
                self.quiz.restart(questions);
                self.next_question();
            }
            Err(err) => {
                log::error!("could not load questions: {err}");
                self.screen = Screen::Failed(err.to_string());
            }
        }
    }

    fn next_question(&mut self) {
        if !self.quiz.still_has_questions() {
            let summary = self.quiz.summary();
            log::info!(
                "quiz finished: {}/{} ({}%)",
                summary.score,
                summary.answered,
                summary.percentage
            );
            self.screen = Screen::Finished(summary);
            return;
        }

        match self.quiz.next_question() {
            Ok(_) => self.screen = Screen::Question,
            Err(err) => {
                log::error!("{err}");
                self.screen = Screen::Finished(self.quiz.summary());
            }
        }
    }

    fn answer(&mut self, answer: Answer, now: Instant) {
        if self.screen != Screen::Question {
            return;
        }
        match self.quiz.check(answer) {
            Ok(is_right) => {
                log::debug!(
                    "question {} answered {answer}: {}",
                    self.quiz.question_number(),
                    if is_right { "right" } else { "wrong" }
                );
                self.screen = Screen::Feedback {
                    is_right,
                    until: now + self.feedback_delay,
                };
            }
            Err(err) => log::warn!("{err}"),
        }
    }

    /// Move on once the feedback colour has been shown long enough.
    fn tick(&mut self, now: Instant) -> Option<Duration> {
        if let Some(batch) = self.loader.poll() {
            self.on_batch(batch);
        }

        if let Screen::Feedback { until, .. } = self.screen {
            if now >= until {
                self.next_question();
            } else {
                return Some(until - now);
            }
        }
        None
    }

    fn card_color(&self) -> egui::Color32 {
        match self.screen {
            Screen::Feedback { is_right: true, .. } => SUCCESS_COLOR,
            Screen::Feedback { is_right: false, .. } => ERROR_COLOR,
            _ => CARD_COLOR,
        }
    }

    fn progress_text(&self) -> String {
        match self.screen {
            Screen::Finished(_) => "Quiz Complete!".to_string(),
            Screen::Loading | Screen::Failed(_) => String::new(),
            _ => format!(
                "Question {} of {}",
                self.quiz.question_number(),
                self.quiz.total()
            ),
        }
    }

    fn score_text(&self) -> String {
        if matches!(self.screen, Screen::Loading | Screen::Failed(_)) {
            return String::new();
        }
        format!(
            "Score: {}/{}",
            self.quiz.score(),
            self.quiz.question_number()
        )
    }

    fn show_card(&self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.card_color())
            .rounding(6.0)
            .inner_margin(egui::Margin::same(20.0))
            .show(ui, |ui| {
                ui.set_min_size(egui::vec2(CARD_SIZE[0] - 40.0, CARD_SIZE[1] - 40.0));
                ui.set_max_width(CARD_SIZE[0] - 40.0);
                ui.vertical_centered(|ui| {
                    match &self.screen {
                        Screen::Loading => {
                            ui.add_space(90.0);
                            ui.spinner();
                            ui.label(
                                egui::RichText::new("Loading new questions...")
                                    .size(18.0)
                                    .italics()
                                    .color(THEME_COLOR),
                            );
                        }
                        Screen::Question | Screen::Feedback { .. } => {
                            let text = self
                                .quiz
                                .current_question()
                                .map(|q| q.text())
                                .unwrap_or_default();
                            let color = if self.screen == Screen::Question {
                                THEME_COLOR
                            } else {
                                egui::Color32::WHITE
                            };
                            ui.add_space(60.0);
                            ui.label(
                                egui::RichText::new(text)
                                    .size(20.0)
                                    .italics()
                                    .color(color),
                            );
                        }
                        Screen::Finished(summary) => {
                            let color = rating_color(summary.rating);
                            ui.add_space(30.0);
                            ui.label(
                                egui::RichText::new(summary.rating.message())
                                    .size(26.0)
                                    .strong()
                                    .color(color),
                            );
                            ui.add_space(15.0);
                            ui.label(
                                egui::RichText::new(format!(
                                    "You scored\n{} out of {}",
                                    summary.score, summary.answered
                                ))
                                .size(22.0)
                                .color(color),
                            );
                            ui.add_space(15.0);
                            ui.label(
                                egui::RichText::new(format!("{}%", summary.percentage))
                                    .size(26.0)
                                    .strong()
                                    .color(color),
                            );
                        }
                        Screen::Failed(message) => {
                            ui.add_space(70.0);
                            ui.label(
                                egui::RichText::new("Couldn't load questions")
                                    .size(22.0)
                                    .strong()
                                    .color(ERROR_COLOR),
                            );
                            ui.add_space(10.0);
                            ui.label(egui::RichText::new(message).size(14.0).color(THEME_COLOR));
                        }
                    }
                });
            });
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        match self.screen {
            Screen::Question | Screen::Feedback { .. } => {
                let enabled = self.screen == Screen::Question;
                let mut picked = None;
                ui.horizontal(|ui| {
                    ui.add_space(60.0);
                    if ui
                        .add_enabled(enabled, answer_button("✔  True", SUCCESS_COLOR))
                        .clicked()
                    {
                        picked = Some(Answer::True);
                    }
                    ui.add_space(60.0);
                    if ui
                        .add_enabled(enabled, answer_button("✖  False", ERROR_COLOR))
                        .clicked()
                    {
                        picked = Some(Answer::False);
                    }
                });
                if let Some(answer) = picked {
                    self.answer(answer, Instant::now());
                }
            }
            Screen::Finished(_) => {
                if ui.add(restart_button("🔄  Play Again")).clicked() {
                    log::info!("restarting quiz");
                    self.fetch_questions();
                }
            }
            Screen::Failed(_) => {
                if ui.add(restart_button("Try Again")).clicked() {
                    self.fetch_questions();
                }
            }
            Screen::Loading => {}
        }
    }
}

fn rating_color(rating: Rating) -> egui::Color32 {
    match rating {
        Rating::Excellent => SUCCESS_COLOR,
        Rating::GoodJob => ACCENT_COLOR,
        Rating::KeepLearning => ERROR_COLOR,
    }
}

fn answer_button(label: &str, color: egui::Color32) -> egui::Button<'_> {
    egui::Button::new(egui::RichText::new(label).size(20.0).strong().color(egui::Color32::WHITE))
        .fill(color)
        .min_size(egui::vec2(120.0, 60.0))
}

fn restart_button(label: &str) -> egui::Button<'_> {
    egui::Button::new(egui::RichText::new(label).size(18.0).strong().color(egui::Color32::WHITE))
        .fill(ACCENT_COLOR)
        .min_size(egui::vec2(200.0, 48.0))
}

impl eframe::App for QuizzlerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(wait) = self.tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(THEME_COLOR).inner_margin(40.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("QUIZZLER")
                            .size(28.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                    ui.add_space(10.0);

                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(self.progress_text())
                                .size(12.0)
                                .color(MUTED_COLOR),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(self.score_text())
                                    .size(16.0)
                                    .strong()
                                    .color(egui::Color32::WHITE),
                            );
                        });
                    });
                    ui.add_space(15.0);

                    self.show_card(ui);
                    ui.add_space(25.0);

                    self.show_controls(ui);
                });
            });
    }
}

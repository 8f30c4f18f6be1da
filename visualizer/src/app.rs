use crate::config::ViewerConfig;
use crate::view;
use chartcore::model::{MetricsResponse, RocPrResponse};
use chartcore::telemetry::ActivityLog;
use chartcore::{ApiClient, ApiResult, MetricsController, RocPrController, ViewController};
use iced::{Element, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Metrics,
    RocPr,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    KindSelected(String),
    SampleCountChanged(u32),
    NoiseChanged(f64),
    LoadMetrics,
    MetricsLoaded(ApiResult<MetricsResponse>),
    LoadRocPr,
    RocPrLoaded(ApiResult<RocPrResponse>),
}

/// Whole-application state. Each screen keeps its controller while hidden.
#[derive(Debug)]
pub struct App {
    pub(crate) client: ApiClient,
    pub(crate) tab: Tab,
    pub(crate) metrics: MetricsController,
    pub(crate) roc_pr: RocPrController,
    pub(crate) activity: ActivityLog,
    roc_pr_shown: bool,
}

impl App {
    /// Builds the initial state and starts the metrics screen's first load.
    pub fn boot(client: ApiClient, config: &ViewerConfig) -> (Self, Task<Message>) {
        let mut app = App {
            client,
            tab: Tab::Metrics,
            metrics: config.metrics_controller(),
            roc_pr: RocPrController::new(),
            activity: ActivityLog::new(),
            roc_pr_shown: false,
        };
        let initial = app.load_metrics();
        (app, initial)
    }

    pub fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                state.tab = tab;
                if tab == Tab::RocPr && !state.roc_pr_shown {
                    state.roc_pr_shown = true;
                    return state.load_roc_pr();
                }
                Task::none()
            }
            Message::KindSelected(kind) => {
                state.metrics.set_kind(kind);
                Task::none()
            }
            Message::SampleCountChanged(sample_count) => {
                state.metrics.set_sample_count(sample_count);
                Task::none()
            }
            Message::NoiseChanged(noise) => {
                state.metrics.set_noise(noise);
                Task::none()
            }
            Message::LoadMetrics => state.load_metrics(),
            Message::MetricsLoaded(outcome) => {
                match &outcome {
                    Ok(response) => state.activity.record(format!(
                        "Metrics: {} points ({})",
                        response.points.len(),
                        response.series
                    )),
                    Err(_) => state.activity.record("Metrics load failed"),
                }
                state.metrics.finish_load(outcome);
                Task::none()
            }
            Message::LoadRocPr => state.load_roc_pr(),
            Message::RocPrLoaded(outcome) => {
                match &outcome {
                    Ok(response) => state.activity.record(format!(
                        "ROC/PR: {} / {} points",
                        response.roc.points.len(),
                        response.pr.points.len()
                    )),
                    Err(_) => state.activity.record("ROC/PR load failed"),
                }
                state.roc_pr.finish_load(outcome);
                Task::none()
            }
        }
    }

    pub fn view(state: &Self) -> Element<'_, Message> {
        view::root(state)
    }

    fn load_metrics(&mut self) -> Task<Message> {
        let query = self.metrics.begin_load();
        let client = self.client.clone();
        Task::perform(
            async move { client.fetch_metrics(&query).await },
            Message::MetricsLoaded,
        )
    }

    fn load_roc_pr(&mut self) -> Task<Message> {
        self.roc_pr.begin_load();
        let client = self.client.clone();
        Task::perform(
            async move { client.fetch_roc_pr().await },
            Message::RocPrLoaded,
        )
    }
}

use crate::app::{App, Message, Tab};
use crate::chart::LineChart;
use chartcore::controller::metrics::{NOISE_RANGE, NOISE_STEP, SAMPLE_COUNT_RANGE, SAMPLE_COUNT_STEP};
use chartcore::controller::{MetricsBody, SeriesChoice, SERIES_CHOICES};
use chartcore::telemetry::ActivityLog;
use chartcore::{MetricsController, RocPrController, ViewController};
use iced::{
    widget::{
        button, canvas::Canvas, column, pick_list, row, scrollable, slider, text, Column,
        Container,
    },
    Alignment, Element, Length,
};

pub fn root(state: &App) -> Element<'_, Message> {
    let tabs = row![
        tab_button("Metrics", Tab::Metrics, state.tab),
        tab_button("ROC & PR", Tab::RocPr, state.tab),
    ]
    .spacing(8);

    let screen = match state.tab {
        Tab::Metrics => metrics_screen(&state.metrics),
        Tab::RocPr => roc_pr_screen(&state.roc_pr),
    };

    let (requests, failures) = state.client.stats().snapshot();
    let status = text(format!(
        "{} | requests {requests} / failures {failures}",
        state.client.base_url()
    ))
    .size(12);

    let layout = column![
        text("Minimal ML Charts").size(26),
        tabs,
        screen,
        status,
        text("Activity log").size(16),
        activity_panel(&state.activity),
    ]
    .spacing(12)
    .padding(20);

    Container::new(scrollable(layout))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn tab_button(label: &'static str, tab: Tab, active: Tab) -> Element<'static, Message> {
    let style: fn(&iced::Theme, button::Status) -> button::Style = if tab == active {
        button::primary
    } else {
        button::secondary
    };
    button(label)
        .on_press(Message::TabSelected(tab))
        .style(style)
        .padding(8)
        .into()
}

fn metrics_screen(metrics: &MetricsController) -> Element<'_, Message> {
    let controls = row![
        pick_list(
            SERIES_CHOICES,
            metrics.selected_choice(),
            |choice: SeriesChoice| Message::KindSelected(choice.kind.to_string()),
        )
        .placeholder("Series"),
        text(format!("n {}", metrics.sample_count())).width(Length::Fixed(70.0)),
        slider(
            SAMPLE_COUNT_RANGE,
            metrics.sample_count(),
            Message::SampleCountChanged
        )
        .step(SAMPLE_COUNT_STEP),
        text(format!("noise {:.2}", metrics.noise())).width(Length::Fixed(100.0)),
        slider(NOISE_RANGE, metrics.noise(), Message::NoiseChanged).step(NOISE_STEP),
        button("Load")
            .on_press(Message::LoadMetrics)
            .style(button::primary)
            .padding(10),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let body: Element<'_, Message> = match metrics.body() {
        MetricsBody::Loading => text("Loading…").size(18).into(),
        MetricsBody::Failed(message) => notice("Error", message),
        MetricsBody::Empty => notice("No Data", "Press Load to fetch a series"),
        MetricsBody::Chart(points) => Canvas::new(LineChart::metrics(points))
            .width(Length::Fill)
            .height(Length::Fixed(320.0))
            .into(),
    };

    column![controls, body].spacing(12).into()
}

fn roc_pr_screen(roc_pr: &RocPrController) -> Element<'_, Message> {
    let mut header = row![button("Generate")
        .on_press(Message::LoadRocPr)
        .style(button::primary)
        .padding(10)]
    .spacing(16)
    .align_y(Alignment::Center);
    if let Some(caption) = roc_pr.roc_auc_caption() {
        header = header.push(text(caption).size(16));
    }
    if let Some(caption) = roc_pr.pr_auc_caption() {
        header = header.push(text(caption).size(16));
    }

    let mut screen = column![
        header,
        text("ROC Curve").size(18),
        Canvas::new(LineChart::roc(roc_pr.roc()))
            .width(Length::Fill)
            .height(Length::Fixed(220.0)),
        text("Precision–Recall Curve").size(18),
        Canvas::new(LineChart::pr(roc_pr.pr()))
            .width(Length::Fill)
            .height(Length::Fixed(220.0)),
    ]
    .spacing(12);

    if let Some(message) = roc_pr.error() {
        screen = screen.push(notice("Error", message));
    }

    screen.into()
}

fn notice(title: &str, description: &str) -> Element<'static, Message> {
    Container::new(
        column![
            text(title.to_string()).size(20),
            text(description.to_string()).size(14),
        ]
        .spacing(4),
    )
    .padding(16)
    .into()
}

fn activity_panel(activity: &ActivityLog) -> Element<'_, Message> {
    let entries = if activity.is_empty() {
        Column::new().push(text("No activity yet").size(12))
    } else {
        activity
            .newest_first()
            .fold(Column::new().spacing(4), |col, entry| {
                col.push(text(entry).size(12))
            })
    };
    Container::new(entries).padding(6).into()
}

use crate::app::Message;
use chartcore::math::AxisDomain;
use chartcore::model::{Keyed, MetricPoint, XYPoint};
use iced::{
    mouse,
    widget::canvas::{self, Frame, Geometry, Path, Stroke, Text},
    Color, Pixels, Point, Rectangle, Renderer, Size, Theme,
};

const MARGIN: f32 = 28.0;
const LINE_COLOR: Color = rgb(0.18, 0.72, 0.89);
const FRAME_COLOR: Color = rgb(0.35, 0.35, 0.45);
const LABEL_COLOR: Color = rgb(0.7, 0.7, 0.75);

const fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color { r, g, b, a: 1.0 }
}

/// Polyline through ordered points with a frame and axis captions.
#[derive(Debug, Clone)]
pub struct LineChart {
    points: Vec<(f64, f64)>,
    x_domain: AxisDomain,
    y_domain: AxisDomain,
    x_label: &'static str,
    y_label: &'static str,
}

impl LineChart {
    /// Chart with both axes fitted to the data.
    pub fn fitted(points: Vec<(f64, f64)>, x_label: &'static str, y_label: &'static str) -> Self {
        let x_domain = AxisDomain::fit(points.iter().map(|p| p.0));
        let y_domain = AxisDomain::fit(points.iter().map(|p| p.1));
        Self {
            points,
            x_domain,
            y_domain,
            x_label,
            y_label,
        }
    }

    /// Chart with both axes fixed to `[0, 1]`.
    pub fn unit(points: Vec<(f64, f64)>, x_label: &'static str, y_label: &'static str) -> Self {
        Self {
            points,
            x_domain: AxisDomain::unit(),
            y_domain: AxisDomain::unit(),
            x_label,
            y_label,
        }
    }

    pub fn metrics(points: &[Keyed<MetricPoint>]) -> Self {
        let points = points.iter().map(|p| (p.value.t, p.value.y)).collect();
        Self::fitted(points, "t", "y")
    }

    pub fn roc(points: &[Keyed<XYPoint>]) -> Self {
        Self::unit(xy(points), "FPR", "TPR")
    }

    pub fn pr(points: &[Keyed<XYPoint>]) -> Self {
        Self::unit(xy(points), "Recall", "Precision")
    }

    /// Maps a data point into `plot`, with `y` growing upwards.
    fn project(&self, plot: Rectangle, (x, y): (f64, f64)) -> Point {
        let nx = self.x_domain.normalize(x) as f32;
        let ny = self.y_domain.normalize(y) as f32;
        Point::new(plot.x + nx * plot.width, plot.y + plot.height - ny * plot.height)
    }
}

fn xy(points: &[Keyed<XYPoint>]) -> Vec<(f64, f64)> {
    points.iter().map(|p| (p.value.x, p.value.y)).collect()
}

fn plot_area(size: Size) -> Rectangle {
    Rectangle {
        x: MARGIN,
        y: MARGIN / 2.0,
        width: (size.width - MARGIN * 1.5).max(1.0),
        height: (size.height - MARGIN * 1.5).max(1.0),
    }
}

fn caption(content: String, position: Point) -> Text {
    Text {
        content,
        position,
        color: LABEL_COLOR,
        size: Pixels(12.0),
        ..Text::default()
    }
}

impl canvas::Program<Message> for LineChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.05, 0.05, 0.05),
        );

        let plot = plot_area(bounds.size());
        frame.stroke(
            &Path::rectangle(Point::new(plot.x, plot.y), plot.size()),
            Stroke::default().with_color(FRAME_COLOR).with_width(1.0),
        );

        match self.points.as_slice() {
            [] => {}
            [single] => {
                let marker = Path::circle(self.project(plot, *single), 3.0);
                frame.fill(&marker, LINE_COLOR);
            }
            [first, rest @ ..] => {
                let path = Path::new(|builder| {
                    builder.move_to(self.project(plot, *first));
                    for point in rest {
                        builder.line_to(self.project(plot, *point));
                    }
                });
                frame.stroke(
                    &path,
                    Stroke::default().with_width(2.0).with_color(LINE_COLOR),
                );
            }
        }

        let bottom = plot.y + plot.height + 4.0;
        frame.fill_text(caption(
            format!("{:.2}", self.x_domain.min),
            Point::new(plot.x, bottom),
        ));
        frame.fill_text(caption(
            format!("{:.2}", self.x_domain.max),
            Point::new(plot.x + plot.width - 28.0, bottom),
        ));
        frame.fill_text(caption(
            self.x_label.to_string(),
            Point::new(plot.x + plot.width / 2.0, bottom),
        ));
        frame.fill_text(caption(
            format!("{:.2}", self.y_domain.max),
            Point::new(2.0, plot.y),
        ));
        frame.fill_text(caption(
            format!("{:.2}", self.y_domain.min),
            Point::new(2.0, plot.y + plot.height - 12.0),
        ));
        frame.fill_text(caption(
            self.y_label.to_string(),
            Point::new(plot.x + 6.0, plot.y + 4.0),
        ));

        vec![frame.into_geometry()]
    }
}

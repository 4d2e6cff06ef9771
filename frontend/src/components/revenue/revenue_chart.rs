use anyhow::{anyhow, Result};
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::MonthlyRevenue;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::services::logging::Logger;

const CHART_WIDTH: u32 = 800;
const CHART_HEIGHT: u32 = 320;
const PRIMARY: RGBColor = RGBColor(124, 58, 237);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartMode {
    Monthly,
    Cumulative,
}

impl ChartMode {
    fn label(&self) -> &'static str {
        match self {
            ChartMode::Monthly => "Monthly",
            ChartMode::Cumulative => "Cumulative",
        }
    }

    /// Values to plot, one per month
    fn series(&self, monthly: &[MonthlyRevenue]) -> Vec<f64> {
        match self {
            ChartMode::Monthly => monthly.iter().map(|m| m.total).collect(),
            ChartMode::Cumulative => monthly
                .iter()
                .scan(0.0, |running, m| {
                    *running += m.total;
                    Some(*running)
                })
                .collect(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevenueChartProps {
    pub monthly: Vec<MonthlyRevenue>,
}

pub enum Msg {
    SetMode(ChartMode),
}

pub struct RevenueChart {
    canvas_ref: NodeRef,
    mode: ChartMode,
}

impl Component for RevenueChart {
    type Message = Msg;
    type Properties = RevenueChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            mode: ChartMode::Monthly,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetMode(mode) => {
                let changed = self.mode != mode;
                self.mode = mode;
                changed
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let monthly = &ctx.props().monthly;
        if monthly.is_empty() {
            return;
        }
        if let Err(e) = self.draw_chart(monthly) {
            Logger::warn_with_component("revenue-chart", &format!("Failed to draw chart: {}", e));
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="revenue-chart-container">
                <div class="chart-title-header">
                    <h3 class="chart-title">{"Revenue by Month"}</h3>
                    <div class="chart-mode-selector">
                        {for [ChartMode::Monthly, ChartMode::Cumulative].into_iter().map(|mode| {
                            let class = if mode == self.mode { "mode-button active" } else { "mode-button" };
                            let onclick = link.callback(move |_| Msg::SetMode(mode));
                            html! {
                                <button type="button" {class} {onclick}>{mode.label()}</button>
                            }
                        })}
                    </div>
                </div>

                {if ctx.props().monthly.is_empty() {
                    html! {
                        <div class="chart-empty">
                            <p>{"No revenue recorded"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="chart-content">
                            <canvas
                                ref={self.canvas_ref.clone()}
                                class="revenue-chart-canvas"
                                width={CHART_WIDTH.to_string()}
                                height={CHART_HEIGHT.to_string()}
                            ></canvas>
                        </div>
                    }
                }}
            </div>
        }
    }
}

fn plot_err<E: std::fmt::Debug>(e: E) -> anyhow::Error {
    anyhow!("{:?}", e)
}

impl RevenueChart {
    fn draw_chart(&self, monthly: &[MonthlyRevenue]) -> Result<()> {
        let canvas = self
            .canvas_ref
            .cast::<HtmlCanvasElement>()
            .ok_or_else(|| anyhow!("canvas is not mounted"))?;
        canvas.set_width(CHART_WIDTH);
        canvas.set_height(CHART_HEIGHT);

        let backend = CanvasBackend::with_canvas_object(canvas)
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?;
        let root = backend.into_drawing_area();
        root.fill(&WHITE).map_err(plot_err)?;

        let values = self.mode.series(monthly);
        let labels: Vec<String> = monthly.iter().map(|m| m.month.short_label()).collect();
        let max_value = values.iter().copied().fold(0.0, f64::max);
        let y_max = if max_value > 0.0 { max_value * 1.15 } else { 1.0 };

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(80)
            .build_cartesian_2d((0..values.len()).into_segmented(), 0.0..y_max)
            .map_err(plot_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .y_label_formatter(&|v| format!("${:.0}", v))
            .x_label_formatter(&|v| match v {
                SegmentValue::CenterOf(index) => labels.get(*index).cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .label_style(("sans-serif", 12, &RGBColor(75, 85, 99)))
            .axis_style(&RGBColor(229, 231, 235))
            .bold_line_style(&RGBColor(243, 244, 246))
            .y_labels(6)
            .draw()
            .map_err(plot_err)?;

        match self.mode {
            ChartMode::Monthly => {
                chart
                    .draw_series(
                        Histogram::vertical(&chart)
                            .style(PRIMARY.filled())
                            .margin(12)
                            .data(values.iter().enumerate().map(|(index, value)| (index, *value))),
                    )
                    .map_err(plot_err)?;
            }
            ChartMode::Cumulative => {
                let points: Vec<(SegmentValue<usize>, f64)> = values
                    .iter()
                    .enumerate()
                    .map(|(index, value)| (SegmentValue::CenterOf(index), *value))
                    .collect();

                chart
                    .draw_series(LineSeries::new(points.iter().cloned(), PRIMARY.stroke_width(3)))
                    .map_err(plot_err)?;
                chart
                    .draw_series(points.iter().map(|point| Circle::new(point.clone(), 4, PRIMARY.filled())))
                    .map_err(plot_err)?;
            }
        }

        root.present().map_err(plot_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::YearMonth;

    fn month(month: u32, total: f64) -> MonthlyRevenue {
        MonthlyRevenue {
            month: YearMonth { year: 2024, month },
            total,
        }
    }

    #[test]
    fn test_series_per_mode() {
        let monthly = vec![month(1, 100.0), month(2, 250.0), month(3, 50.0)];

        assert_eq!(ChartMode::Monthly.series(&monthly), vec![100.0, 250.0, 50.0]);
        assert_eq!(ChartMode::Cumulative.series(&monthly), vec![100.0, 350.0, 400.0]);
        assert!(ChartMode::Cumulative.series(&[]).is_empty());
    }
}

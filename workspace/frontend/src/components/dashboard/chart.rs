use churn_common::{ChartId, ChartKind, ChartSeries, DataSource};
use plotly::common::{Fill, Line, Marker, Mode};
use plotly::layout::Margin;
use plotly::{Bar, Layout, Scatter};
use serde::Serialize;
use serde_json::json;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

const DEFAULT_HEIGHT: usize = 300;
const ENLARGED_HEIGHT: usize = 500;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct ChartPanelProps {
    pub series: ChartSeries,
    pub enlarged: bool,
    pub on_click: Callback<ChartId>,
}

/// Card holding one chart. Clicking the chart toggles its enlargement.
#[function_component(ChartPanel)]
pub fn chart_panel(props: &ChartPanelProps) -> Html {
    let series = &props.series;

    let onclick = {
        let on_click = props.on_click.clone();
        let id = series.id;
        Callback::from(move |_: MouseEvent| {
            log::debug!("Chart panel clicked: {:?}", id);
            on_click.emit(id);
        })
    };

    let frame_style = if props.enlarged {
        "max-width: 100%; margin: auto; cursor: zoom-out;"
    } else {
        "max-width: 500px; margin: auto; cursor: zoom-in;"
    };

    let (badge_class, badge_text) = match series.source {
        DataSource::Live => ("badge-primary", "Live"),
        DataSource::Mixed => ("badge-secondary", "Live + reference"),
        DataSource::Illustrative => ("badge-ghost", "Illustrative"),
    };

    html! {
        <div class={classes!("card", "bg-base-100", "shadow", props.enlarged.then_some("col-span-full"))}>
            <div class="card-body">
                <h3 class="card-title justify-center">
                    {series.title}
                    <span class={classes!("badge", badge_class)}>{badge_text}</span>
                </h3>
                <div class="tooltip w-full" data-tip="Click to zoom">
                    <div style={frame_style} {onclick}>
                        <PlotlyChart series={series.clone()} enlarged={props.enlarged} />
                    </div>
                </div>
                if series.source == DataSource::Mixed {
                    <p class="text-xs text-center text-gray-500">
                        {"Low and High are reference values; Medium is the current prediction."}
                    </p>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PlotlyChartProps {
    series: ChartSeries,
    enlarged: bool,
}

#[function_component(PlotlyChart)]
fn plotly_chart(props: &PlotlyChartProps) -> Html {
    let container_ref = use_node_ref();
    let height = if props.enlarged { ENLARGED_HEIGHT } else { DEFAULT_HEIGHT };
    let div_id = props.series.id.dom_id();

    // Redraw whenever the data or the panel size changes
    use_effect_with(
        (container_ref.clone(), props.series.clone(), height),
        move |(container_ref, series, height)| {
            if container_ref.cast::<Element>().is_some() {
                if let Err(err) = draw(series, *height) {
                    log::error!("Failed to draw chart {}: {:?}", series.id.dom_id(), err);
                }
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} id={div_id} style={format!("width: 100%; height: {}px;", height)}></div>
    }
}

fn draw(series: &ChartSeries, height: usize) -> Result<(), JsValue> {
    log::trace!("Drawing chart {} at {}px", series.id.dom_id(), height);

    let trace = trace_json(series).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let layout = Layout::new()
        .height(height)
        .show_legend(series.kind == ChartKind::Pie)
        .margin(Margin::new().top(20).bottom(40).left(40).right(20));

    let config = json!({"responsive": true, "displayModeBar": false});

    new_plot(
        series.id.dom_id(),
        to_js(&vec![trace])?,
        to_js(&layout)?,
        to_js(&config)?,
    );
    Ok(())
}

fn trace_json(series: &ChartSeries) -> serde_json::Result<serde_json::Value> {
    let name = series.series_label.unwrap_or(series.title);

    match series.kind {
        // plotly 0.9 has no pie trace, so this one is written out by hand
        ChartKind::Pie => Ok(json!({
            "type": "pie",
            "labels": series.labels,
            "values": series.values,
            "marker": {"colors": series.colors},
            "sort": false
        })),
        ChartKind::Line => {
            let color = series.colors.first().copied().unwrap_or("rgba(255, 99, 132, 1)");
            let trace = Scatter::new(series.labels.clone(), series.values.clone())
                .mode(Mode::LinesMarkers)
                .fill(Fill::ToZeroY)
                .name(name)
                .line(Line::new().color(color).width(2.0));
            serde_json::to_value(&trace)
        }
        ChartKind::Bar => {
            let trace = Bar::new(series.labels.clone(), series.values.clone())
                .name(name)
                .marker(Marker::new().color_array(series.colors.clone()));
            serde_json::to_value(&trace)
        }
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

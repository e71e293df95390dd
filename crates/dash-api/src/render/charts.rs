// ============================================================================
// Dash API - Chart Configurations
// File: crates/dash-api/src/render/charts.rs
// Description: Chart.js configs for the consumer dashboard, built from trends
// ============================================================================

use dash_core::ActivityTrends;
use serde::Serialize;
use serde_json::{json, Value};

const PURPLE: &str = "#8b5cf6";
const GREEN: &str = "#10b981";
const AMBER: &str = "#f59e0b";
const BLUE: &str = "#3b82f6";

#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    pub data: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<&'static str>,
    /// A single colour, or one per slice for doughnuts.
    pub background_color: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsumerCharts {
    pub orders: ChartConfig,
    pub payments: ChartConfig,
    pub categories: ChartConfig,
}

pub fn consumer_charts(trends: &ActivityTrends) -> ConsumerCharts {
    ConsumerCharts {
        orders: orders_chart(trends),
        payments: payments_chart(trends),
        categories: categories_chart(trends),
    }
}

fn orders_chart(trends: &ActivityTrends) -> ChartConfig {
    ChartConfig {
        kind: "line",
        data: ChartData {
            labels: trends.months.clone(),
            datasets: vec![Dataset {
                label: Some("Orders"),
                data: trends.orders.clone(),
                border_color: Some(PURPLE),
                background_color: json!("rgba(139,92,246,0.12)"),
                tension: Some(0.35),
                fill: Some(true),
                point_radius: Some(4),
            }],
        },
        options: json!({
            "responsive": true,
            "plugins": { "legend": { "display": false } },
            "scales": { "y": { "beginAtZero": true } }
        }),
    }
}

fn payments_chart(trends: &ActivityTrends) -> ChartConfig {
    ChartConfig {
        kind: "bar",
        data: ChartData {
            labels: trends.months.clone(),
            datasets: vec![
                Dataset {
                    label: Some("Payments"),
                    data: trends.payments.clone(),
                    background_color: json!("rgba(16,185,129,0.7)"),
                    ..Default::default()
                },
                Dataset {
                    label: Some("Outstanding"),
                    data: trends.outstanding.clone(),
                    background_color: json!("rgba(139,92,246,0.6)"),
                    ..Default::default()
                },
            ],
        },
        options: json!({
            "responsive": true,
            "plugins": { "legend": { "position": "bottom" } },
            "scales": { "y": { "beginAtZero": true } }
        }),
    }
}

fn categories_chart(trends: &ActivityTrends) -> ChartConfig {
    ChartConfig {
        kind: "doughnut",
        data: ChartData {
            labels: trends.categories.iter().map(|c| c.category.clone()).collect(),
            datasets: vec![Dataset {
                data: trends.categories.iter().map(|c| c.share).collect(),
                background_color: json!([PURPLE, GREEN, AMBER, BLUE]),
                ..Default::default()
            }],
        },
        options: json!({ "plugins": { "legend": { "position": "bottom" } } }),
    }
}

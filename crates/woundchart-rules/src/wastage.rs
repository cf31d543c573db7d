//! Product usage and JW wastage calculator.
//!
//! Deterministic arithmetic over four optional inputs. Negative inputs count
//! as zero and division by a zero product size falls back to the "0" /
//! "0.00" display defaults.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use woundchart_core::fields::to_fixed;
use woundchart_core::models::wound::WoundMeasurement;
use woundchart_core::steps::WorkflowStep;

use crate::{Gate, MissingItem};

/// The JW wastage page record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct JwWastage {
    pub wound_length: Option<f64>,
    pub wound_width: Option<f64>,
    /// cm²
    pub product_size: Option<f64>,
    pub product_name: String,
    pub hcpcs_code: String,
    /// Price per cm².
    pub unit_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WastageCalculation {
    pub wound_area: f64,
    pub product_size: f64,
    pub used_area: f64,
    pub wastage: f64,
    pub wastage_percent: String,
    pub used_amount: String,
    pub discarded_amount: String,
    pub total_amount: String,
    pub jw_modifier_needed: bool,
}

fn non_negative(v: Option<f64>) -> f64 {
    v.map(|x| x.max(0.0)).unwrap_or(0.0)
}

fn currency(unit_price: f64, quantity: f64) -> String {
    if unit_price > 0.0 && quantity > 0.0 {
        to_fixed(unit_price * quantity, 2)
    } else {
        "0.00".to_string()
    }
}

pub fn calculate(
    length: Option<f64>,
    width: Option<f64>,
    product_size: Option<f64>,
    unit_price: Option<f64>,
) -> WastageCalculation {
    let wound_area = WoundMeasurement::new(length, width).area().unwrap_or(0.0);
    let product_size = non_negative(product_size);
    let unit_price = non_negative(unit_price);

    let wastage = if product_size > 0.0 {
        (product_size - wound_area).max(0.0)
    } else {
        0.0
    };
    let used_area = wound_area.min(product_size);

    let wastage_percent = if product_size > 0.0 && wastage > 0.0 {
        to_fixed(wastage / product_size * 100.0, 1)
    } else {
        "0".to_string()
    };

    WastageCalculation {
        wound_area,
        product_size,
        used_area,
        wastage,
        wastage_percent,
        used_amount: currency(unit_price, used_area),
        discarded_amount: currency(unit_price, wastage),
        total_amount: currency(unit_price, product_size),
        jw_modifier_needed: wastage > 0.0,
    }
}

/// The usage bar under the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ProductUsage {
    /// No product size entered yet.
    NoProduct { message: String },
    Breakdown {
        used: f64,
        wasted: f64,
        used_percent: String,
        wasted_percent: String,
        /// Bar widths, 0–100.
        used_width: f64,
        wasted_width: f64,
        jw_label: String,
    },
}

pub fn product_usage(product_size: f64, used_amount: f64) -> ProductUsage {
    if product_size <= 0.0 {
        return ProductUsage::NoProduct {
            message: "Enter product size to see usage breakdown".to_string(),
        };
    }
    let used = used_amount.max(0.0).min(product_size);
    let wasted = (product_size - used_amount.max(0.0)).max(0.0);
    ProductUsage::Breakdown {
        used,
        wasted,
        used_percent: to_fixed(used / product_size * 100.0, 1),
        wasted_percent: to_fixed(wasted / product_size * 100.0, 1),
        used_width: (used / product_size * 100.0).min(100.0),
        wasted_width: wasted / product_size * 100.0,
        jw_label: if wasted > 0.0 { "Required" } else { "Not Needed" }.to_string(),
    }
}

impl JwWastage {
    pub fn calculation(&self) -> WastageCalculation {
        calculate(
            self.wound_length,
            self.wound_width,
            self.product_size,
            self.unit_price,
        )
    }

    pub fn usage(&self) -> ProductUsage {
        let calc = self.calculation();
        product_usage(calc.product_size, calc.wound_area)
    }
}

impl Gate for JwWastage {
    fn step(&self) -> WorkflowStep {
        WorkflowStep::JwWastage
    }

    fn missing(&self) -> Vec<MissingItem> {
        let mut missing = Vec::new();
        if self.wound_length.is_none() || self.wound_width.is_none() {
            missing.push(MissingItem::new("wound_size", "Wound length and width"));
        }
        if self.product_size.is_none() {
            missing.push(MissingItem::new("product_size", "Product size"));
        }
        missing
    }
}

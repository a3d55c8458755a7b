//! Fixed charge display formatting

use tabled::Tabled;

use super::format::table;
use crate::models::fixed_charge::total_of_active;
use crate::models::FixedCharge;

#[derive(Tabled)]
struct FixedChargeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Active")]
    active: &'static str,
    #[tabled(rename = "Description")]
    description: String,
}

pub fn format_fixed_charge_list(charges: &[FixedCharge]) -> String {
    if charges.is_empty() {
        return "No fixed charges found.\n".to_string();
    }

    let rows: Vec<FixedChargeRow> = charges
        .iter()
        .map(|c| FixedChargeRow {
            id: c.id().to_string(),
            name: c.name().to_string(),
            amount: c.amount().to_string(),
            active: if c.is_active() { "yes" } else { "no" },
            description: c.description().to_string(),
        })
        .collect();

    let mut output = table(rows, "");
    output.push_str(&format!(
        "Deducted per salary: {}\n",
        total_of_active(charges)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_total_counts_active_only() {
        let charges = vec![
            FixedCharge::new("Rent", Money::from_cents(120_000), "", true),
            FixedCharge::new("Gym", Money::from_cents(25_000), "", false),
        ];
        let output = format_fixed_charge_list(&charges);
        assert!(output.contains("Gym"));
        assert!(output.contains("Deducted per salary: 1200.00 MAD"));
    }
}

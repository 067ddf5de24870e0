//! Member display formatting
//!
//! Formats the plan board, member tables and member details for terminal
//! output.

use crate::config::settings::{Locale, Settings};
use crate::services::board::{BoardRow, PlanGroup};

/// Marker appended to plans the status rules don't know
pub const UNKNOWN_PLAN_MARKER: &str = "(unknown plan)";

fn width_of(s: &str) -> usize {
    s.chars().count()
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(width_of(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Placeholder for a plan without members
pub fn empty_label(locale: Locale) -> &'static str {
    match locale {
        Locale::Es => "Sin miembros",
        Locale::En => "No members",
    }
}

fn remind_hint(locale: Locale) -> &'static str {
    match locale {
        Locale::Es => "[recordar]",
        Locale::En => "[remind]",
    }
}

/// Format the grouped board
pub fn format_board(groups: &[PlanGroup], settings: &Settings) -> String {
    let mut output = String::new();

    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }

        let marker = if group.service.is_known() {
            String::new()
        } else {
            format!(" {}", UNKNOWN_PLAN_MARKER)
        };
        output.push_str(&format!(
            "{} {} · {}{}\n",
            group.service.icon(),
            group.service.name(),
            group.header,
            marker
        ));

        if group.rows.is_empty() {
            output.push_str(&format!("  {}\n", empty_label(settings.locale)));
            continue;
        }

        let name_width = group
            .rows
            .iter()
            .map(|r| width_of(&r.member.name))
            .max()
            .unwrap_or(4);
        let status_width = group
            .rows
            .iter()
            .map(|r| width_of(&r.display.status_text))
            .max()
            .unwrap_or(6);

        for row in &group.rows {
            let mut line = format!(
                "  {}  {}",
                pad(&row.member.name, name_width),
                pad(&row.display.status_text, status_width)
            );
            if !row.member.balance.is_zero() {
                line.push_str(&format!(
                    "  {:>10}",
                    row.member.balance.format_with_symbol(&settings.currency_symbol)
                ));
            }
            if row.display.requires_collection_action {
                line.push_str(&format!("  {}", remind_hint(settings.locale)));
            }
            output.push_str(line.trim_end());
            output.push('\n');
        }
    }

    output
}

/// Format all members as a table
pub fn format_member_list(rows: &[BoardRow], settings: &Settings) -> String {
    if rows.is_empty() {
        return "No members found.".to_string();
    }

    let symbol = &settings.currency_symbol;
    let name_width = rows
        .iter()
        .map(|r| width_of(&r.member.name))
        .max()
        .unwrap_or(4)
        .max(4);
    let plan_width = rows
        .iter()
        .map(|r| width_of(r.member.service.name()))
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {}  {}  {:>10}  {:>10}  {}\n",
        "ID",
        pad("Name", name_width),
        pad("Plan", plan_width),
        "Fee",
        "Balance",
        "Status",
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:-<plan_width$}  {:->10}  {:->10}  {:-<20}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        plan_width = plan_width,
    ));

    for row in rows {
        let member = &row.member;
        let mut status = row.display.status_text.clone();
        if !member.service.is_known() {
            status.push_str(&format!(" {}", UNKNOWN_PLAN_MARKER));
        }
        output.push_str(&format!(
            "{:<12}  {}  {}  {:>10}  {:>10}  {}\n",
            member.id.to_string(),
            pad(&member.name, name_width),
            pad(member.service.name(), plan_width),
            member.fee.format_with_symbol(symbol),
            member.balance.format_with_symbol(symbol),
            status,
        ));
    }

    output
}

/// Format a single member's details
pub fn format_member_details(row: &BoardRow, settings: &Settings) -> String {
    let member = &row.member;
    let symbol = &settings.currency_symbol;

    let mut output = String::new();
    output.push_str(&format!("Member: {}\n", member.name));
    output.push_str(&format!("  ID:       {}\n", member.id));
    output.push_str(&format!("  Plan:     {}", member.service.name()));
    if !member.service.is_known() {
        output.push_str(&format!(" {}", UNKNOWN_PLAN_MARKER));
    }
    output.push('\n');
    output.push_str(&format!("  Fee:      {}\n", member.fee.format_with_symbol(symbol)));
    output.push_str(&format!(
        "  Balance:  {}\n",
        member.balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Status:   {}\n", row.display.status_text));

    let ahead = row.status.periods_ahead();
    if ahead > 0 {
        output.push_str(&format!("  Prepaid:  {} period(s)\n", ahead));
    }
    if row.display.requires_collection_action {
        output.push_str(&format!(
            "\n  Collection needed: planshare remind \"{}\"\n",
            member.name
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        member.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        member.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

use chrono::NaiveDate;
use pacing_core::{
    calendar::add_weekdays,
    storage::MemoryTemplateBackend,
    BudgetState, Controller, Field, PacingError, TemplateSource, TemplateStore,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date")
}

fn controller() -> Controller {
    Controller::new(TemplateStore::new(Box::new(
        MemoryTemplateBackend::default(),
    )))
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[test]
fn field_edits_drive_a_full_recalculation() {
    let mut ctl = controller();
    let end = add_weekdays(today(), 9);

    ctl.on_field_change("currentLifetimeBudget", "25000", today())
        .expect("budget edit");
    ctl.on_field_change("currentSpend", "5000", today())
        .expect("spend edit");
    let state = ctl
        .on_date_change("currentEndDate", &iso(end), today())
        .expect("date edit");

    assert_eq!(state.current_daily_budget, 2_000.0);
}

#[test]
fn unknown_field_names_are_rejected() {
    let mut ctl = controller();
    let err = ctl
        .on_field_change("lifetimeValue", "100", today())
        .unwrap_err();
    assert!(matches!(err, PacingError::UnknownField(_)));

    // Derived fields are not editable either.
    let err = ctl
        .on_field_change("currentDailyBudget", "100", today())
        .unwrap_err();
    assert!(matches!(err, PacingError::UnknownField(_)));
}

#[test]
fn blank_raw_value_clears_the_field() {
    let mut ctl = controller();
    ctl.on_field_change("currentSpend", "5000", today())
        .expect("set spend");
    let state = ctl
        .on_field_change("currentSpend", "", today())
        .expect("clear spend");
    assert_eq!(state.current_spend, None);
}

#[test]
fn warnings_are_refreshed_on_every_edit() {
    let mut ctl = controller();
    ctl.on_date_change("currentEndDate", "2025-03-03", today())
        .expect("past date edit");
    assert!(ctl.warnings().contains_key(&Field::CurrentEndDate));

    ctl.on_date_change("currentEndDate", "2025-03-28", today())
        .expect("future date edit");
    assert!(ctl.warnings().is_empty());
}

#[test]
fn overspend_warning_does_not_block_calculation() {
    let mut ctl = controller();
    let end = add_weekdays(today(), 4);
    ctl.on_field_change("currentLifetimeBudget", "1000", today())
        .expect("budget edit");
    ctl.on_field_change("currentSpend", "1500", today())
        .expect("spend edit");
    let state = ctl
        .on_date_change("currentEndDate", &iso(end), today())
        .expect("date edit");

    assert!(state.current_daily_budget < 0.0);
    assert!(ctl.warnings().contains_key(&Field::CurrentSpend));
}

#[test]
fn toggling_day_count_recomputes_in_place() {
    let mut ctl = controller();
    // Monday through Sunday: 5 weekdays, 7 calendar days.
    ctl.on_field_change("currentLifetimeBudget", "700", today())
        .expect("budget edit");
    ctl.on_date_change("currentEndDate", "2025-03-16", today())
        .expect("date edit");
    assert_eq!(ctl.state().current_daily_budget, 140.0);

    let state = ctl.toggle_day_count(today());
    assert_eq!(state.current_daily_budget, 100.0);

    let state = ctl.toggle_day_count(today());
    assert_eq!(state.current_daily_budget, 140.0);
}

#[test]
fn template_round_trip_through_the_controller() {
    let mut ctl = controller();
    let end = add_weekdays(today(), 9);
    ctl.on_field_change("currentLifetimeBudget", "25000", today())
        .expect("budget edit");
    ctl.on_field_change("currentSpend", "5000", today())
        .expect("spend edit");
    ctl.on_date_change("currentEndDate", &iso(end), today())
        .expect("date edit");
    ctl.on_field_change("newDailyBudget", "1500", today())
        .expect("rate edit");

    let saved = ctl.save_template("Spring push").expect("save template");

    let mut other = controller();
    let state = other.apply_template(&saved, today()).clone();
    assert_eq!(state.current_daily_budget, 2_000.0);
    assert_eq!(state.new_lifetime_budget, 20_000.0);
    assert_eq!(state.new_end_date, Some(end));

    ctl.delete_template(&saved.id);
    let customs: Vec<_> = ctl
        .templates(today())
        .into_iter()
        .filter(|entry| entry.source == TemplateSource::Custom)
        .collect();
    assert!(customs.is_empty());
}

#[test]
fn save_rejection_leaves_state_untouched() {
    let mut ctl = controller();
    ctl.on_field_change("currentSpend", "5000", today())
        .expect("spend edit");
    let before: BudgetState = ctl.state().clone();

    let err = ctl.save_template("No budget yet").unwrap_err();
    assert!(matches!(err, PacingError::InvalidTemplate(_)));
    assert_eq!(ctl.state(), &before);
    assert!(ctl
        .templates(today())
        .iter()
        .all(|entry| entry.source == TemplateSource::BuiltIn));
}

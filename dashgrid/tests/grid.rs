use dashgrid::config::{EditModalConfig, TableConfig};
use dashgrid::form::{FormFieldSpec, InputType};
use dashgrid::format::format_value;
use dashgrid::model::{
    ColumnSpec, ColumnType, FilterSpec, FilterType, FilterValue, Row, SortSpec, Value,
    rows_from_json,
};
use dashgrid::{EventLog, Grid, GridEvent, SaveError};
use serde_json::json;

fn employees() -> Vec<Row> {
    rows_from_json(json!([
        {"id": "1", "name": "Alice", "salary": "5000", "dept": "eng", "score": null},
        {"id": "2", "name": "Bob", "salary": "7000", "dept": "ops", "score": 10},
        {"id": "3", "name": "Carol", "salary": "6500", "dept": "eng", "score": 5},
        {"id": "4", "name": "Dan", "salary": "4200", "dept": "sales", "score": 8},
        {"id": "5", "name": "Erin", "salary": "9100", "dept": "eng"},
    ]))
    .unwrap()
}

fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("name", "Name"),
        ColumnSpec::new("salary", "Salary").kind(ColumnType::Currency),
        ColumnSpec::new("dept", "Department").kind(ColumnType::Select),
        ColumnSpec::new("score", "Score"),
    ]
}

fn ids(rows: &[&Row]) -> Vec<String> {
    rows.iter().map(|r| r.id().to_string()).collect()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_currency_and_case_insensitive_search() {
    let rows = rows_from_json(json!([
        {"id": "1", "name": "Alice", "salary": "5000"},
        {"id": "2", "name": "Bob", "salary": "7000"},
    ]))
    .unwrap();
    let mut grid = Grid::new(vec![
        ColumnSpec::new("name", "Name"),
        ColumnSpec::new("salary", "Salary").kind(ColumnType::Currency),
    ])
    .with_rows(rows)
    .unwrap();

    assert_eq!(format_value(&Value::from("5000"), ColumnType::Currency), "$5,000");
    assert_eq!(grid.cell(&grid.rows()[0], &grid.columns()[1]), "$5,000");

    grid.set_search("bob");
    assert_eq!(ids(&grid.filtered_rows()), vec!["2"]);
}

#[test]
fn test_delete_on_last_page_clamps() {
    let rows = rows_from_json(json!([
        {"id": "a", "name": "A"},
        {"id": "b", "name": "B"},
        {"id": "c", "name": "C"},
    ]))
    .unwrap();
    let mut grid = Grid::new(vec![ColumnSpec::new("name", "Name")])
        .with_config(TableConfig::default().with_items_per_page(1))
        .with_rows(rows)
        .unwrap();

    grid.go_to_page(3);
    assert_eq!(grid.current_page(), 3);
    let target = grid.page_rows()[0].id().to_string();
    assert_eq!(target, "c");

    grid.request_delete(&target);
    grid.confirm_delete();

    assert_eq!(grid.filtered_count(), 2);
    assert_eq!(grid.total_pages(), 2);
    assert_eq!(grid.current_page(), 2);
}

#[test]
fn test_required_email_blocks_save() {
    let log = EventLog::new();
    let mut grid = Grid::new(columns())
        .with_form(
            vec![
                FormFieldSpec::new("name", "Name", InputType::Text).required(),
                FormFieldSpec::new("email", "Email", InputType::Email).required(),
            ],
            EditModalConfig::default(),
        )
        .with_listener(log.clone())
        .with_rows(employees())
        .unwrap();
    let before = grid.rows().to_vec();

    let mut session = grid.begin_edit("1").unwrap();
    session.set_value("name", "Alicia");
    let err = grid.save_edit(session).unwrap_err();

    let SaveError::Invalid(session) = err else {
        panic!("expected validation failure");
    };
    let errors = session.result().error_map();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("email").map(String::as_str), Some("Email is required"));
    assert_eq!(grid.rows(), before.as_slice());
    assert!(log.drain().is_empty());
}

#[test]
fn test_sort_nulls_last_scenario() {
    let rows = rows_from_json(json!([
        {"id": "a", "score": null},
        {"id": "b", "score": 10},
        {"id": "c", "score": 5},
    ]))
    .unwrap();
    let mut grid = Grid::new(vec![ColumnSpec::new("score", "Score")])
        .with_rows(rows)
        .unwrap();

    grid.set_sort(Some(SortSpec::asc("score")));
    assert_eq!(ids(&grid.filtered_rows()), vec!["c", "b", "a"]);

    grid.set_sort(Some(SortSpec::desc("score")));
    assert_eq!(ids(&grid.filtered_rows()), vec!["b", "c", "a"]);
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_sort_on_unknown_key_keeps_pipeline_order() {
    let mut grid = Grid::new(columns()).with_rows(employees()).unwrap();

    grid.set_sort(Some(SortSpec::desc("nope")));
    assert_eq!(ids(&grid.filtered_rows()), vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn test_sort_on_unsortable_column_keeps_pipeline_order() {
    let mut grid = Grid::new(vec![
        ColumnSpec::new("name", "Name").not_sortable(),
        ColumnSpec::new("dept", "Department"),
    ])
    .with_rows(employees())
    .unwrap();

    grid.set_sort(Some(SortSpec::desc("name")));
    assert_eq!(ids(&grid.filtered_rows()), vec!["1", "2", "3", "4", "5"]);

    grid.toggle_sort("name");
    assert_eq!(grid.sort(), Some(&SortSpec::desc("name")));

    grid.set_sort(Some(SortSpec::asc("dept")));
    assert_eq!(ids(&grid.filtered_rows()), vec!["1", "3", "5", "2", "4"]);
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn test_select_filter_and_all_sentinel() {
    let mut grid = Grid::new(columns())
        .with_filters(vec![FilterSpec::new("dept", "Department", FilterType::Select)])
        .with_rows(employees())
        .unwrap();

    grid.set_filter("dept", "eng");
    assert_eq!(ids(&grid.filtered_rows()), vec!["1", "3", "5"]);

    grid.set_filter("dept", "all");
    assert_eq!(grid.filtered_count(), 5);
}

#[test]
fn test_filters_combine_with_search() {
    let mut grid = Grid::new(columns())
        .with_filters(vec![
            FilterSpec::new("dept", "Department", FilterType::Select).multiple(),
            FilterSpec::new("score", "Score", FilterType::Number),
        ])
        .with_rows(employees())
        .unwrap();

    grid.set_filter(
        "dept",
        FilterValue::Multiple(vec![Value::from("eng"), Value::from("ops")]),
    );
    assert_eq!(grid.filtered_count(), 4);

    grid.set_search("o");
    assert_eq!(ids(&grid.filtered_rows()), vec!["2", "3"]);

    grid.clear_filters();
    grid.set_search("");
    assert_eq!(grid.filtered_count(), 5);
}

#[test]
fn test_disabled_features_pass_through() {
    let config = TableConfig::default()
        .with_search(false)
        .with_filters(false)
        .with_sorting(false)
        .with_pagination(false);
    let mut grid = Grid::new(columns())
        .with_config(config)
        .with_filters(vec![FilterSpec::new("dept", "Department", FilterType::Select)])
        .with_rows(employees())
        .unwrap();

    grid.set_search("bob");
    grid.set_filter("dept", "eng");
    grid.set_sort(Some(SortSpec::desc("name")));

    assert_eq!(ids(&grid.page_rows()), vec!["1", "2", "3", "4", "5"]);
}

// ============================================================================
// Edit & Delete
// ============================================================================

#[test]
fn test_request_delete_never_mutates() {
    let log = EventLog::new();
    let mut grid = Grid::new(columns())
        .with_listener(log.clone())
        .with_rows(employees())
        .unwrap();

    assert!(grid.request_delete("2"));
    assert!(grid.request_delete("3"));
    assert_eq!(grid.rows().len(), 5);
    assert!(log.drain().is_empty());

    assert_eq!(grid.confirm_delete(), vec!["3"]);
    assert_eq!(grid.rows().len(), 4);
    assert!(grid.row("2").is_some());
}

#[test]
fn test_bulk_delete_notifies_per_row() {
    let log = EventLog::new();
    let mut grid = Grid::new(columns())
        .with_config(TableConfig::default().with_selection(true))
        .with_listener(log.clone())
        .with_rows(employees())
        .unwrap();

    grid.toggle_row("2");
    grid.toggle_row("4");
    assert_eq!(
        grid.pending_delete(),
        None,
        "selection alone does not open a prompt"
    );
    grid.request_bulk_delete();
    assert_eq!(
        grid.pending_delete().map(|p| p.message()),
        Some("Are you sure you want to delete 2 selected items?".to_string())
    );
    log.drain();

    grid.confirm_delete();
    let events = log.drain();
    assert_eq!(
        events,
        vec![
            GridEvent::ItemDeleted("2".into()),
            GridEvent::ItemDeleted("4".into()),
            GridEvent::DataChanged(grid.rows().to_vec()),
            GridEvent::ItemsSelected(Vec::new()),
        ]
    );
}

#[test]
fn test_saved_edit_keeps_position_and_reindexes() {
    let mut grid = Grid::new(columns())
        .with_form(
            vec![FormFieldSpec::new("name", "Name", InputType::Text).required()],
            EditModalConfig::default(),
        )
        .with_rows(employees())
        .unwrap();

    grid.set_search("zed");
    assert_eq!(grid.filtered_count(), 0);

    let mut session = grid.begin_edit("4").unwrap();
    session.set_value("name", "Zed");
    grid.save_edit(session).unwrap();

    assert_eq!(grid.rows()[3].display_name(), "Zed");
    assert_eq!(ids(&grid.filtered_rows()), vec!["4"]);
}

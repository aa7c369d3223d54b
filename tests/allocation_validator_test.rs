// ==========================================
// 食堂点餐系统 - 周菜单分配校验集成测试
// ==========================================


use canteen_menu::domain::{DishId, DishType, WeeklyScheduleRequest};
use canteen_menu::engine::{AllocationError, AllocationLimits, AllocationValidator};
use std::cell::Cell;
use std::collections::HashMap;
use test_helpers::{catalog, schedule};

fn canteen_catalog() -> HashMap<DishId, DishType> {
    catalog(&[
        (1, DishType::Soup),
        (2, DishType::Soup),
        (3, DishType::Soup),
        (10, DishType::Main),
        (11, DishType::Main),
        (20, DishType::Garnish),
        (30, DishType::Drink),
        (31, DishType::Drink),
        (32, DishType::Drink),
        (40, DishType::Bread),
    ])
}

#[test]
fn test_three_soups_rejected() {
    let validator = AllocationValidator::default();
    let request = schedule(vec![
        (0, vec![1, 10, 20]),
        (2, vec![1, 2, 3, 10]),
        (4, vec![30]),
    ]);

    let err = validator.validate(&request, &canteen_catalog()).unwrap_err();
    assert_eq!(
        err,
        AllocationError::CategoryOverflow {
            day_of_week: 2,
            dish_type: DishType::Soup,
            count: 3,
            limit: 2,
        }
    );
}

#[test]
fn test_first_violation_wins() {
    let validator = AllocationValidator::default();
    let request = schedule(vec![
        (5, vec![30, 31, 32]),
        (1, vec![1, 2, 3]),
    ]);

    let err = validator.validate(&request, &canteen_catalog()).unwrap_err();
    assert!(matches!(
        err,
        AllocationError::CategoryOverflow { day_of_week: 5, dish_type: DishType::Drink, .. }
    ));
}

#[test]
fn test_fail_fast_stops_resolving() {
    let validator = AllocationValidator::default();
    let lookups = Cell::new(0usize);
    let resolver = |id: DishId| {
        lookups.set(lookups.get() + 1);
        canteen_catalog().get(&id).copied()
    };
    let request = schedule(vec![
        (0, vec![1, 2, 3]),
        (1, vec![10, 11, 20, 30]),
    ]);

    assert!(validator.validate(&request, &resolver).is_err());
    assert_eq!(lookups.get(), 3);
}

#[test]
fn test_same_day_multiple_overflows_reports_declaration_order() {
    let validator = AllocationValidator::default();
    // DRINK 在 SOUP 之前声明
    let request = schedule(vec![(3, vec![1, 2, 3, 30, 31, 32])]);

    let err = validator.validate(&request, &canteen_catalog()).unwrap_err();
    assert!(matches!(
        err,
        AllocationError::CategoryOverflow { dish_type: DishType::Drink, .. }
    ));
}

#[test]
fn test_valid_week_accepted_and_idempotent() {
    let validator = AllocationValidator::default();
    let request = schedule(vec![
        (0, vec![1, 2, 10, 11, 20, 30, 31, 40]),
        (1, vec![3, 10, 20]),
        (2, vec![]),
        (6, vec![1, 32]),
    ]);
    let resolver = canteen_catalog();

    let first = validator.validate(&request, &resolver);
    let second = validator.validate(&request, &resolver);
    assert_eq!(first, Ok(()));
    assert_eq!(first, second);
}

#[test]
fn test_unresolved_ids_do_not_count() {
    let validator = AllocationValidator::default();
    let request = schedule(vec![(0, vec![1, 2, 999, 1000, 1001])]);

    assert!(validator.validate(&request, &canteen_catalog()).is_ok());

    let summary = validator.day_summary(&request.schedule[0], &canteen_catalog());
    assert_eq!(summary.counts.get(&DishType::Soup), Some(&2));
    assert_eq!(summary.unresolved, vec![999, 1000, 1001]);
}

#[test]
fn test_empty_schedule_accepted() {
    let validator = AllocationValidator::default();
    let request = WeeklyScheduleRequest::default();
    assert!(validator.validate(&request, &canteen_catalog()).is_ok());
}

#[test]
fn test_configured_limit() {
    let validator = AllocationValidator::new(AllocationLimits {
        max_per_type_per_day: 1,
    });
    let request = schedule(vec![(0, vec![10, 11])]);

    let err = validator.validate(&request, &canteen_catalog()).unwrap_err();
    assert_eq!(
        err,
        AllocationError::CategoryOverflow {
            day_of_week: 0,
            dish_type: DishType::Main,
            count: 2,
            limit: 1,
        }
    );
}

#[test]
fn test_rejection_message_names_day_and_type() {
    let err = AllocationError::CategoryOverflow {
        day_of_week: 2,
        dish_type: DishType::Soup,
        count: 3,
        limit: 2,
    };
    let message = err.to_string();
    assert!(message.contains('2'));
    assert!(message.contains("SOUP"));
    assert!(message.contains('3'));
}

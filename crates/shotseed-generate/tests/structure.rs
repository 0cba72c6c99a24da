use shotseed_core::DEPARTMENTS;
use shotseed_generate::{generate_episodes, generate_project, generate_users};

#[test]
fn roster_is_twelve_fixed_artists() {
    let users = generate_users();
    assert_eq!(users.len(), 12);

    let ids: Vec<i64> = users.iter().map(|u| u.sg_id).collect();
    let expected: Vec<i64> = (1001..=1012).collect();
    assert_eq!(ids, expected);

    assert!(users.iter().all(|u| u.is_active));
    assert_eq!(users[0].name, "Alex Chen");
    assert_eq!(users[11].name, "Skyler Wilson");
}

#[test]
fn emails_derive_from_names() {
    for user in generate_users() {
        let mut parts = user.name.split(' ');
        let first = parts.next().unwrap().to_lowercase();
        let last = parts.next().unwrap().to_lowercase();
        assert_eq!(user.email, format!("{first}.{last}@studio.local"));
    }
}

#[test]
fn departments_cycle_by_position() {
    let users = generate_users();
    for (idx, user) in users.iter().enumerate() {
        let expected = DEPARTMENTS[(idx + 1) % DEPARTMENTS.len()];
        assert_eq!(user.department, expected, "user {}", user.name);
    }

    // Twelve artists over six departments: exactly two per department.
    for dept in DEPARTMENTS {
        let staffed = users.iter().filter(|u| u.department == dept).count();
        assert_eq!(staffed, 2, "{dept:?}");
    }
}

#[test]
fn project_is_the_single_cosmos_record() {
    let project = generate_project();
    assert_eq!(project.sg_id, 100);
    assert_eq!(project.code, "COSMOS");
    assert_eq!(project.name, "Cosmos: A Space Journey");
    assert_eq!(project.status, "Active");
    assert_eq!(project.start_date.to_string(), "2025-01-06");
    assert_eq!(project.end_date.to_string(), "2025-12-19");
}

#[test]
fn episodes_follow_the_fixed_catalog() {
    let episodes = generate_episodes(100);
    assert_eq!(episodes.len(), 3);

    let ids: Vec<i64> = episodes.iter().map(|e| e.sg_id).collect();
    assert_eq!(ids, vec![201, 202, 203]);
    assert!(episodes.iter().all(|e| e.project_id == 100));

    assert_eq!(episodes[0].code, "EP101");
    assert_eq!(episodes[0].name, "The Launch");
    assert_eq!(episodes[1].code, "EP102");
    assert_eq!(episodes[1].name, "First Contact");
    assert_eq!(episodes[2].code, "EP103");
    assert_eq!(episodes[2].name, "The Return");

    assert_eq!(episodes[0].status, "In Production");
    assert_eq!(episodes[1].status, "In Production");
    assert_eq!(episodes[2].status, "Pre-Production");

    let cuts: Vec<i32> = episodes.iter().map(|e| e.cut_order).collect();
    assert_eq!(cuts, vec![1, 2, 3]);
}

//! Demo records matching the dashboard mock-ups, loaded when `seed.demo_data` is on.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use models::{Client, ClientId, ClientStatus, Platform, Shoot, ShootId, ShootStatus};

use crate::store::SeedData;

fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    local(y, m, d, 0, 0).and_utc()
}

fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn client(
    id: &str,
    name: &str,
    email: &str,
    website: Option<&str>,
    platforms: Vec<Platform>,
    brand_colors: &str,
    status: ClientStatus,
    notes: &str,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
) -> Client {
    Client {
        id: ClientId::from(id),
        name: name.into(),
        email: Some(email.into()),
        website: website.map(Into::into),
        phone: None,
        platforms,
        brand_colors: Some(brand_colors.into()),
        logo_url: None,
        guidelines: None,
        status,
        notes: notes.into(),
        created_at: created,
        updated_at: updated,
    }
}

pub fn demo() -> SeedData {
    let mut acme = client(
        "1",
        "Acme Corp",
        "hello@acmecorp.com",
        Some("https://acmecorp.com"),
        vec![Platform::Instagram, Platform::Facebook],
        "#FF6B6B",
        ClientStatus::Active,
        "Great client, loves creative content",
        day(2024, 1, 1),
        day(2024, 1, 15),
    );
    acme.phone = Some("+1 (555) 123-4567".into());
    acme.logo_url = Some("https://example.com/logo.png".into());
    acme.guidelines = Some("https://example.com/guidelines.pdf".into());

    let clients = vec![
        acme,
        client(
            "2",
            "Tech Startup",
            "contact@techstartup.io",
            Some("https://techstartup.io"),
            vec![Platform::Linkedin, Platform::Instagram],
            "#4ECDC4",
            ClientStatus::Active,
            "Focus on professional, tech-forward content",
            day(2024, 1, 5),
            day(2024, 1, 10),
        ),
        client(
            "3",
            "Fashion Brand",
            "info@fashionbrand.com",
            None,
            vec![Platform::Instagram, Platform::Facebook],
            "#45B7D1",
            ClientStatus::Paused,
            "Contract renewal needed",
            day(2023, 12, 1),
            day(2023, 12, 20),
        ),
    ];

    let shoot = |id: &str, client_id: &str, at: NaiveDateTime, location: &str, count: u32, objectives: &str, equipment: &str, folder: &str, notes: &str| Shoot {
        id: ShootId::from(id),
        client_id: ClientId::from(client_id),
        scheduled_at: at,
        location: location.into(),
        expected_content_count: Some(count),
        objectives: objectives.into(),
        equipment: equipment.into(),
        notes: notes.into(),
        status: ShootStatus::Scheduled,
        drive_folder_id: Some(folder.into()),
        drive_folder_url: Some(format!("https://drive.google.com/drive/folders/{folder}")),
        calendar_event_id: None,
        calendar_event_url: None,
        completed_at: None,
        created_at: day(2024, 1, 10),
    };

    let mut factory = shoot(
        "3",
        "1",
        local(2024, 1, 15, 9, 0),
        "Factory Location",
        25,
        "Manufacturing process documentation",
        "DSLR, macro lens, industrial lighting",
        "ghi789",
        "Completed successfully - all content uploaded",
    );
    factory.status = ShootStatus::Complete;
    factory.completed_at = Some(local(2024, 1, 15, 15, 30));

    let shoots = vec![
        shoot(
            "1",
            "1",
            local(2024, 1, 25, 10, 0),
            "Downtown Office Building",
            15,
            "Product launch content - headshots and office environment",
            "DSLR, lighting kit, tripod",
            "abc123",
            "Client prefers natural lighting",
        ),
        shoot(
            "2",
            "2",
            local(2024, 1, 28, 14, 0),
            "Client's Office - 123 Tech St",
            20,
            "Team photos and workspace shots for recruitment content",
            "DSLR, wide-angle lens, portable lighting",
            "def456",
            "Need shots of the development team and office space",
        ),
        factory,
    ];

    SeedData { clients, shoots, posts: Vec::new() }
}

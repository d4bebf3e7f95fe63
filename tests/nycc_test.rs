use cycling_events::sources::{nycc, nycc_calendar};

#[test]
fn extracts_ride_listings_with_club_fields() {
    let html = r#"
        <div class="ride-item">
            <div class="ride-title">Saturday A19 River Road</div>
            <div class="ride-date">May 18, 2024</div>
            <div class="start-location">Sakura Park</div>
            <div class="ride-leader">J. Moser</div>
            <div class="pace">A19</div>
            <div class="ride-distance">55 mi</div>
            <a href="/rides/4521">signup</a>
        </div>
    "#;

    let events = nycc::parse_document(html);
    assert_eq!(events.len(), 1);

    let event = &events[0];
    assert_eq!(event.source, "nycc");
    assert_eq!(event.name, "Saturday A19 River Road");
    assert_eq!(event.date.as_produced(), "2024-05-18T00:00:00.000Z");
    assert_eq!(event.location, "Sakura Park");
    assert_eq!(event.url.as_deref(), Some("https://nycc.org/rides/4521"));
    assert_eq!(event.leader.as_deref(), Some("J. Moser"));
    assert_eq!(event.pace.as_deref(), Some("A19"));
    assert_eq!(event.distance.as_deref(), Some("55 mi"));
}

#[test]
fn ride_name_falls_back_to_heading_tags() {
    let html = r#"
        <div class="ride-listing">
            <h4>Beginner Loop</h4>
            <div class="date">5/19/2024</div>
        </div>
    "#;

    let events = nycc::parse_document(html);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "Beginner Loop");
    assert!(events[0].leader.is_none());
}

#[test]
fn rides_without_date_text_are_skipped() {
    let html = r#"
        <div class="ride-item">
            <div class="ride-title">Ghost Ride</div>
            <div class="start-location">Grand Army Plaza</div>
        </div>
    "#;

    assert!(nycc::parse_document(html).is_empty());
}

#[test]
fn calendar_entries_carry_time_and_type() {
    let html = r#"
        <div class="calendar-event">
            <div class="event-title">Spring Social</div>
            <div class="event-date">May 20, 2024</div>
            <div class="event-location">Clubhouse</div>
            <div class="event-time">7:00 PM</div>
            <div class="event-type">Social</div>
            <a href="/calendar/spring-social">more</a>
        </div>
    "#;

    let events = nycc_calendar::parse_document(html);
    assert_eq!(events.len(), 1);

    let event = &events[0];
    assert_eq!(event.source, "nycc_calendar");
    assert_eq!(event.name, "Spring Social");
    assert_eq!(event.time.as_deref(), Some("7:00 PM"));
    assert_eq!(event.kind.as_deref(), Some("Social"));
    assert_eq!(
        event.url.as_deref(),
        Some("https://nycc.org/calendar/spring-social")
    );
}

#[test]
fn calendar_secondary_selectors_apply() {
    let html = r#"
        <div class="event">
            <div class="title">Town Hall</div>
            <div class="date">2024-05-21</div>
        </div>
    "#;

    let events = nycc_calendar::parse_document(html);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "Town Hall");
    assert_eq!(events[0].date.as_produced(), "2024-05-21T00:00:00.000Z");
}

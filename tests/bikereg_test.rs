use cycling_events::sources::bikereg;
use cycling_events::types::EventDate;

#[test]
fn extracts_one_event_per_complete_fragment() {
    let html = r#"
        <div class="event-item">
            <div class="event-title">Spring Road Race</div>
            <div class="event-date">May 10, 2024</div>
            <div class="event-location">Albany, NY</div>
            <div class="event-discipline">Road</div>
            <div class="event-distance">62 mi</div>
            <a href="/events/12345">details</a>
        </div>
        <div class="event-item">
            <div class="event-title"></div>
            <div class="event-date">May 11, 2024</div>
        </div>
        <div class="event-item">
            <div class="event-title">No Date Race</div>
            <div class="event-location">Utica, NY</div>
        </div>
    "#;

    let events = bikereg::parse_document(html);
    assert_eq!(events.len(), 1);

    let event = &events[0];
    assert_eq!(event.source, "bikereg");
    assert_eq!(event.name, "Spring Road Race");
    assert_eq!(event.date.as_produced(), "2024-05-10T00:00:00.000Z");
    assert_eq!(event.location, "Albany, NY");
    assert_eq!(event.url.as_deref(), Some("https://www.bikereg.com/events/12345"));
    assert_eq!(event.discipline.as_deref(), Some("Road"));
    assert_eq!(event.distance.as_deref(), Some("62 mi"));
}

#[test]
fn falls_back_to_secondary_selectors() {
    let html = r#"
        <div class="event-row">
            <div class="event-name"><a href="https://www.bikereg.com/e/99">Night Crit</a></div>
            <div class="date">6/21/2024</div>
            <div class="location">Brooklyn, NY</div>
        </div>
    "#;

    let events = bikereg::parse_document(html);
    assert_eq!(events.len(), 1);

    let event = &events[0];
    assert_eq!(event.name, "Night Crit");
    assert_eq!(event.date.as_produced(), "2024-06-21T00:00:00.000Z");
    assert_eq!(event.location, "Brooklyn, NY");
    // Absolute hrefs pass through URL normalization unchanged
    assert_eq!(event.url.as_deref(), Some("https://www.bikereg.com/e/99"));
}

#[test]
fn mixed_markup_shapes_all_produce_events() {
    let html = r#"
        <div class="event-item">
            <div class="event-title">Spring Road Race</div>
            <div class="event-date">May 10, 2024</div>
        </div>
        <div class="event-row">
            <div class="event-name"><a href="/e/7">Night Crit</a></div>
            <div class="date">6/21/2024</div>
        </div>
    "#;

    let events = bikereg::parse_document(html);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].name, "Spring Road Race");
    assert_eq!(events[1].name, "Night Crit");
}

#[test]
fn unparseable_date_text_is_carried_through_raw() {
    let html = r#"
        <div class="event-item">
            <div class="event-title">Mystery Gravel Day</div>
            <div class="event-date">Date to be announced</div>
        </div>
    "#;

    let events = bikereg::parse_document(html);
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].date,
        EventDate::Unparsed("Date to be announced".to_string())
    );
}

#[test]
fn empty_document_produces_no_events() {
    assert!(bikereg::parse_document("<html><body></body></html>").is_empty());
}

//! Golden-value tests for eclipse-adjacent markers over the mean-lunation
//! adapter.

use coligny_moon::{EclipseKind, MeanLunation, next_eclipse_markers};
use coligny_time::Moment;

#[test]
fn markers_from_new_year_2024() {
    let now = Moment::new(2024, 1, 1, 0, 0, 0.0);
    let [lunar, solar] = next_eclipse_markers(&MeanLunation, now);

    assert_eq!(lunar.kind, EclipseKind::Lunar);
    assert_eq!(lunar.moment.to_string(), "2024-01-26 02:38:15");

    assert_eq!(solar.kind, EclipseKind::Solar);
    assert_eq!(solar.moment.to_string(), "2024-01-11 08:16:14");
}

#[test]
fn markers_always_at_or_after_now() {
    // Sweep across a year of query instants, including ones that sit right
    // on a syzygy day.
    for day in 0..365 {
        let now = Moment::from_day_number(19_723.0 + f64::from(day) + 0.5);
        let markers = next_eclipse_markers(&MeanLunation, now);
        assert_eq!(markers.len(), 2);
        for marker in &markers {
            assert!(
                marker.moment.day_number() >= now.day_number(),
                "marker {} precedes now {}",
                marker.moment,
                now
            );
        }
    }
}

#[test]
fn fixed_texts_preserved() {
    let markers = next_eclipse_markers(&MeanLunation, Moment::new(2025, 6, 15, 12, 0, 0.0));
    assert_eq!(markers[0].title, "Lunar Eclipse");
    assert_eq!(
        markers[0].description,
        "Shadow and light embrace in celestial dance, a moment between worlds."
    );
    assert_eq!(markers[1].title, "Solar Eclipse");
    assert_eq!(
        markers[1].description,
        "A rare solar eclipse is on the horizon."
    );
}

use sajulotto_web::components::ball_color_class;
use sajulotto_web::rich_text::{Segment, split_emphasis};

#[test]
fn emphasis_runs_are_isolated() {
    let segments = split_emphasis("Luck <b>rises</b> in the east.");
    assert_eq!(
        segments,
        vec![
            Segment::Plain("Luck ".to_string()),
            Segment::Emphasis("rises".to_string()),
            Segment::Plain(" in the east.".to_string()),
        ]
    );
}

#[test]
fn multiple_emphasis_runs_split_cleanly() {
    let segments = split_emphasis("<b>gold</b> and <b>jade</b>");
    assert_eq!(
        segments,
        vec![
            Segment::Emphasis("gold".to_string()),
            Segment::Plain(" and ".to_string()),
            Segment::Emphasis("jade".to_string()),
        ]
    );
}

#[test]
fn unclosed_emphasis_swallows_the_tail() {
    let segments = split_emphasis("steady <b>fortune ahead");
    assert_eq!(
        segments,
        vec![
            Segment::Plain("steady ".to_string()),
            Segment::Emphasis("fortune ahead".to_string()),
        ]
    );
}

#[test]
fn plain_text_stays_one_segment() {
    assert_eq!(
        split_emphasis("no markup here"),
        vec![Segment::Plain("no markup here".to_string())]
    );
    assert!(split_emphasis("").is_empty());
}

#[test]
fn ball_colors_follow_the_number_bands() {
    assert_eq!(ball_color_class(1), "ball-yellow");
    assert_eq!(ball_color_class(10), "ball-yellow");
    assert_eq!(ball_color_class(11), "ball-blue");
    assert_eq!(ball_color_class(25), "ball-red");
    assert_eq!(ball_color_class(40), "ball-gray");
    assert_eq!(ball_color_class(45), "ball-green");
}

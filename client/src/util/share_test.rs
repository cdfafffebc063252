use super::*;

const PAGE: &str = "https://blog.example.com/blog/42";

#[test]
fn links_encode_page_url() {
    let fb = ShareTarget::Facebook.link(PAGE, "Hi");
    assert_eq!(fb, "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fblog.example.com%2Fblog%2F42");
}

#[test]
fn twitter_carries_title() {
    let tw = ShareTarget::Twitter.link(PAGE, "Night & day");
    assert!(tw.starts_with("https://twitter.com/intent/tweet?"));
    assert!(tw.contains("text=Night+%26+day"));
}

#[test]
fn every_target_has_a_link() {
    for target in ShareTarget::ALL {
        let link = target.link(PAGE, "t");
        assert!(link.starts_with("https://"), "{} -> {link}", target.label());
        assert!(link.contains("blog.example.com"));
    }
}

#[test]
fn share_url_drops_fragment() {
    assert_eq!(share_url("https://blog.example.com/blog/42#comments"), PAGE);
}

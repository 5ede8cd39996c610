//! End-to-end listing flow as the rendering layer drives it: raw query
//! string in, page plus navigation window out, outbound links rebuilt
//! through the codec.

use newsdesk::{nav, pagination, ArticleDraft, ContentApi, NavState};

fn seed(api: &ContentApi, count: usize, tag: &str) {
    for n in 0..count {
        api.create(ArticleDraft {
            title: format!("{tag} article {n}"),
            content: format!("Everything about {tag}, part {n}"),
            author: "Ann".into(),
            tags: vec![tag.into()],
        })
        .unwrap();
    }
}

#[test]
fn test_raw_request_to_rendered_links() {
    let api = ContentApi::with_page_size(2);
    seed(&api, 7, "go");
    seed(&api, 3, "rust");

    // Raw, untrusted request for the go listing, page 2.
    let page = api.list("?page=2&tag=go");
    assert_eq!(page.total, 7);
    assert_eq!(page.page, 2);
    assert_eq!(page.limit, 2);
    assert_eq!(page.total_pages, 4);
    assert!(page.has_more);
    assert_eq!(page.articles.len(), 2);

    // Window the renderer shows for these controls.
    assert_eq!(api.page_window(&page), vec![1, 2, 3, 4]);

    // Outbound links preserve the filter and stay canonical.
    let state = nav::decode("?page=2&tag=go");
    assert_eq!(nav::page_href("/articles", 3, &state), "/articles?page=3&tag=go");
    assert_eq!(nav::page_href("/articles", 1, &state), "/articles?tag=go");
    assert_eq!(
        nav::tag_href("/articles", "rust", &state),
        "/articles?tag=rust"
    );
}

#[test]
fn test_walking_every_page_reproduces_the_filtered_set() {
    let api = ContentApi::with_page_size(3);
    seed(&api, 8, "go");

    let state = NavState {
        page: 1,
        tag: Some("go".into()),
        search: None,
    };
    let first = api.list_with(&state);
    assert_eq!(first.total_pages, 3);

    let mut seen = Vec::new();
    for page_no in 1..=first.total_pages {
        let page = api.list_with(&state.with_page(page_no));
        assert_eq!(page.page, page_no);
        seen.extend(page.articles.into_iter().map(|a| a.id));
    }

    let full: Vec<_> = api.store().list_all().into_iter().map(|a| a.id).collect();
    assert_eq!(seen, full);
}

#[test]
fn test_empty_listing_degrades_cleanly() {
    let api = ContentApi::new();
    let page = api.list("page=999&search=absent");
    assert_eq!(page.total, 0);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 1);
    // Renderer suppresses controls for a single page; the raw window for a
    // one-page listing is just that page.
    assert_eq!(
        pagination::window(page.page, page.total_pages, pagination::DEFAULT_WINDOW),
        vec![1]
    );
}

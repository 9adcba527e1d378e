use std::sync::Arc;
use std::thread;
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::infrastructure::persistence::InMemoryUrlRepository;

#[test]
fn test_concurrent_increments_are_not_lost() {
    let repo = InMemoryUrlRepository::new();

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for _ in 0..500 {
                    repo.increment_domain("example.com");
                }
            });
        }
    });

    assert_eq!(repo.domain_counts().get("example.com"), Some(&4000));
}

#[test]
fn test_concurrent_inserts_keep_both_directions_consistent() {
    let repo = InMemoryUrlRepository::new();

    thread::scope(|s| {
        for worker in 0..8 {
            let repo = &repo;
            s.spawn(move || {
                for i in 0..200 {
                    let code = format!("w{worker}-{i}");
                    let url = format!("https://example.com/{worker}/{i}");
                    repo.insert(&code, &url);
                }
            });
        }

        s.spawn(|| {
            for _ in 0..1000 {
                if let Some(url) = repo.find_by_code("w0-0") {
                    assert_eq!(repo.find_by_url(&url).as_deref(), Some("w0-0"));
                }
            }
        });
    });

    assert_eq!(repo.len(), 1600);
    for worker in 0..8 {
        for i in 0..200 {
            let code = format!("w{worker}-{i}");
            let url = repo.find_by_code(&code).unwrap();
            assert_eq!(repo.find_by_url(&url), Some(code));
        }
    }
}

#[test]
fn test_shared_handle_sees_writes() {
    let repo = Arc::new(InMemoryUrlRepository::new());
    let writer = Arc::clone(&repo);

    thread::spawn(move || writer.insert("abc12345", "https://example.com/"))
        .join()
        .unwrap();

    assert_eq!(
        repo.find_by_code("abc12345").as_deref(),
        Some("https://example.com/")
    );
}

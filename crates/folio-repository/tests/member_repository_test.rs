//! Integration tests for the in-memory member and team repositories.

use folio_core::{
    AuditInterceptor, Chunk, Direction, Member, PageRequest, PageResultAdapter, Sort, Team,
};
use folio_repository::{
    InMemoryMemberRepository, InMemoryTeamRepository, MemberRepository, TeamRepository,
};
use std::sync::Arc;

async fn five_members_aged_ten() -> Arc<dyn MemberRepository> {
    let repo: Arc<dyn MemberRepository> = Arc::new(InMemoryMemberRepository::new(
        AuditInterceptor::with_auditor("test"),
    ));
    let members = (1..=5)
        .map(|i| Member::with_age(format!("member{i}"), 10))
        .collect();
    repo.save_all(members).await.unwrap();
    repo
}

#[tokio::test]
async fn test_counted_page_adapts_to_one_based() {
    let repo = five_members_aged_ten().await;
    let request = PageRequest::of(1, 3, Sort::by(Direction::Desc, ["username"])).unwrap();

    let page = repo.find_by_age_page(10, request).await.unwrap();
    assert_eq!(page.number(), 1);

    let display = PageResultAdapter::adapt_counted_with(page, |m| m.username).unwrap();
    assert_eq!(display.page_number(), 2);
    assert_eq!(display.total_pages(), Some(2));
    assert_eq!(display.total_elements(), Some(5));
    assert!(display.is_last());
    assert_eq!(display.content(), &["member2", "member1"]);
}

#[tokio::test]
async fn test_slice_adapts_without_totals() {
    let repo = five_members_aged_ten().await;
    let request = PageRequest::of_size(0, 2).unwrap();

    let slice = repo.find_by_age_slice(10, request).await.unwrap();
    let display = PageResultAdapter::adapt_slice(slice).unwrap();

    assert_eq!(display.page_number(), 1);
    assert_eq!(display.number_of_elements(), 2);
    assert!(!display.is_last());
    assert_eq!(display.total_pages(), None);
}

#[tokio::test]
async fn test_walk_all_pages() {
    let repo = five_members_aged_ten().await;
    let mut request = Some(PageRequest::of_size(0, 2).unwrap());
    let mut seen = Vec::new();

    while let Some(current) = request {
        let page = repo.find_all_page(current).await.unwrap();
        seen.extend(page.content().iter().map(|m| m.username.clone()));
        request = page.next_request();
    }

    assert_eq!(seen.len(), 5);
    assert_eq!(seen.first().map(String::as_str), Some("member1"));
}

#[tokio::test]
async fn test_member_on_team() {
    let teams = InMemoryTeamRepository::default();
    let members = InMemoryMemberRepository::default();

    let team_a = teams.save(Team::new("teamA")).await.unwrap();
    let team_id = team_a.id.unwrap();
    members
        .save(Member::with_team("member1", 10, team_id))
        .await
        .unwrap();

    let found = members.find_by_username("member1").await.unwrap();
    let team = teams.find_by_id(found[0].team_id.unwrap()).await.unwrap();
    assert_eq!(team.map(|t| t.name).as_deref(), Some("teamA"));
}

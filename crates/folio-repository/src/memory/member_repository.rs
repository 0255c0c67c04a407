//! In-memory [`MemberRepository`].

use super::SequenceTable;
use crate::paging::{page_of, slice_of};
use crate::sorting::apply_sort;
use crate::traits::{MemberRepository, MemberRepositoryCustom};
use async_trait::async_trait;
use folio_core::{
    AuditInterceptor, FolioError, FolioResult, Member, MemberId, Page, PageRequest, Slice,
};
use tracing::debug;

/// Member repository backed by a [`SequenceTable`].
#[derive(Debug, Default)]
pub struct InMemoryMemberRepository {
    table: SequenceTable<Member>,
    audit: AuditInterceptor,
}

impl InMemoryMemberRepository {
    #[must_use]
    pub fn new(audit: AuditInterceptor) -> Self {
        Self {
            table: SequenceTable::new(),
            audit,
        }
    }

    async fn sorted_where<P>(&self, request: &PageRequest, predicate: P) -> FolioResult<Vec<Member>>
    where
        P: Fn(&Member) -> bool,
    {
        let mut rows = self.table.select(predicate).await;
        apply_sort(&mut rows, request.sort())?;
        Ok(rows)
    }
}

#[async_trait]
impl MemberRepositoryCustom for InMemoryMemberRepository {
    async fn find_member_custom(&self) -> FolioResult<Vec<Member>> {
        debug!("Repository: find_member_custom");
        Ok(self.table.all().await)
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn save(&self, mut member: Member) -> FolioResult<Member> {
        let mut rows = self.table.write().await;

        match member.id {
            None => {
                let id = self.table.next_id();
                member.id = Some(MemberId(id));
                self.audit.on_insert(&mut member);
                debug!(id, username = %member.username, "Repository: inserted member");
                rows.insert(id, member.clone());
            }
            Some(id) => {
                let stored = rows
                    .get(&id.0)
                    .ok_or_else(|| FolioError::not_found("Member", id))?;
                member.audit.created_by.clone_from(&stored.audit.created_by);
                member.audit.created_date = stored.audit.created_date;
                self.audit.on_update(&mut member);
                debug!(id = id.0, username = %member.username, "Repository: merged member");
                rows.insert(id.0, member.clone());
            }
        }

        Ok(member)
    }

    async fn save_all(&self, members: Vec<Member>) -> FolioResult<Vec<Member>> {
        let mut saved = Vec::with_capacity(members.len());
        for member in members {
            saved.push(self.save(member).await?);
        }
        Ok(saved)
    }

    async fn find_by_id(&self, id: MemberId) -> FolioResult<Option<Member>> {
        debug!("Repository: find_by_id {}", id);
        Ok(self.table.get(id.0).await)
    }

    async fn find_all(&self) -> FolioResult<Vec<Member>> {
        Ok(self.table.all().await)
    }

    async fn find_all_page(&self, request: PageRequest) -> FolioResult<Page<Member>> {
        debug!(page = request.page_index(), size = request.page_size(), sort = %request.sort(), "Repository: find_all_page");
        let rows = self.sorted_where(&request, |_| true).await?;
        page_of(rows, &request)
    }

    async fn find_by_username(&self, username: &str) -> FolioResult<Vec<Member>> {
        debug!("Repository: find_by_username {}", username);
        Ok(self.table.select(|m| m.username == username).await)
    }

    async fn find_by_username_and_age_greater_than(
        &self,
        username: &str,
        age: u32,
    ) -> FolioResult<Vec<Member>> {
        Ok(self
            .table
            .select(|m| m.username == username && m.age > age)
            .await)
    }

    async fn find_user(&self, username: &str, age: u32) -> FolioResult<Vec<Member>> {
        Ok(self
            .table
            .select(|m| m.username == username && m.age == age)
            .await)
    }

    async fn find_username_list(&self) -> FolioResult<Vec<String>> {
        Ok(self
            .table
            .all()
            .await
            .into_iter()
            .map(|m| m.username)
            .collect())
    }

    async fn find_by_names(&self, names: &[String]) -> FolioResult<Vec<Member>> {
        Ok(self
            .table
            .select(|m| names.iter().any(|n| *n == m.username))
            .await)
    }

    async fn find_optional_by_username(&self, username: &str) -> FolioResult<Option<Member>> {
        let mut found = self.find_by_username(username).await?;
        if found.len() > 1 {
            return Err(FolioError::conflict(format!(
                "Expected at most one member named '{}', found {}",
                username,
                found.len()
            )));
        }
        Ok(found.pop())
    }

    async fn find_by_age_page(&self, age: u32, request: PageRequest) -> FolioResult<Page<Member>> {
        debug!(age, page = request.page_index(), size = request.page_size(), "Repository: find_by_age_page");
        let rows = self.sorted_where(&request, |m| m.age == age).await?;
        page_of(rows, &request)
    }

    async fn find_by_age_slice(
        &self,
        age: u32,
        request: PageRequest,
    ) -> FolioResult<Slice<Member>> {
        debug!(age, page = request.page_index(), size = request.page_size(), "Repository: find_by_age_slice");
        let rows = self.sorted_where(&request, |m| m.age == age).await?;
        slice_of(rows, &request)
    }

    async fn bulk_age_plus(&self, age: u32) -> FolioResult<u64> {
        let mut rows = self.table.write().await;
        let mut updated = 0;
        for member in rows.values_mut().filter(|m| m.age >= age) {
            member.age = member.age.saturating_add(1);
            self.audit.on_update(member);
            updated += 1;
        }
        debug!(age, updated, "Repository: bulk_age_plus");
        Ok(updated)
    }

    async fn delete(&self, id: MemberId) -> FolioResult<bool> {
        debug!("Repository: delete {}", id);
        Ok(self.table.remove(id.0).await)
    }

    async fn count(&self) -> FolioResult<u64> {
        Ok(self.table.len().await as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{Chunk, Direction, Sort};

    async fn seeded(members: &[(&str, u32)]) -> InMemoryMemberRepository {
        let repo = InMemoryMemberRepository::default();
        for (name, age) in members {
            repo.save(Member::with_age(*name, *age)).await.unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_save_assigns_id_and_audit() {
        let repo = InMemoryMemberRepository::new(AuditInterceptor::with_auditor("admin"));
        let saved = repo.save(Member::new("memberA")).await.unwrap();

        assert_eq!(saved.id, Some(MemberId(1)));
        assert_eq!(saved.audit.created_by.as_deref(), Some("admin"));
        assert!(saved.audit.created_date.is_some());

        let found = repo.find_by_id(MemberId(1)).await.unwrap().unwrap();
        assert_eq!(found, saved);
    }

    #[tokio::test]
    async fn test_merge_keeps_creation_audit() {
        let repo = InMemoryMemberRepository::default();
        let saved = repo.save(Member::new("member1")).await.unwrap();

        let mut changed = saved.clone();
        changed.change_username("member2");
        changed.audit = Default::default();
        let merged = repo.save(changed).await.unwrap();

        assert_eq!(merged.username, "member2");
        assert_eq!(merged.audit.created_date, saved.audit.created_date);
        assert!(merged.audit.last_modified_date >= saved.audit.last_modified_date);
    }

    #[tokio::test]
    async fn test_merge_unknown_id_is_not_found() {
        let repo = InMemoryMemberRepository::default();
        let mut ghost = Member::new("ghost");
        ghost.id = Some(MemberId(42));
        let err = repo.save(ghost).await.unwrap_err();
        assert!(matches!(err, FolioError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_basic_crud() {
        let repo = seeded(&[("member1", 0), ("member2", 0)]).await;
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
        assert_eq!(repo.count().await.unwrap(), 2);

        assert!(repo.delete(MemberId(1)).await.unwrap());
        assert!(repo.delete(MemberId(2)).await.unwrap());
        assert!(!repo.delete(MemberId(2)).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_find_by_username_and_age_greater_than() {
        let repo = seeded(&[("AAA", 10), ("AAA", 20)]).await;
        let result = repo
            .find_by_username_and_age_greater_than("AAA", 15)
            .await
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].age, 20);
    }

    #[tokio::test]
    async fn test_find_user_and_username_list() {
        let repo = seeded(&[("AAA", 10), ("BBB", 20)]).await;
        let found = repo.find_user("AAA", 10).await.unwrap();
        assert_eq!(found.len(), 1);
        assert!(repo.find_user("AAA", 20).await.unwrap().is_empty());
        assert_eq!(repo.find_username_list().await.unwrap(), ["AAA", "BBB"]);
    }

    #[tokio::test]
    async fn test_find_by_names() {
        let repo = seeded(&[("AAA", 10), ("BBB", 20), ("CCC", 30)]).await;
        let names = vec!["AAA".to_string(), "BBB".to_string()];
        assert_eq!(repo.find_by_names(&names).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_find_optional_by_username() {
        let repo = seeded(&[("AAA", 10), ("BBB", 20), ("BBB", 30)]).await;
        assert!(repo.find_optional_by_username("none").await.unwrap().is_none());
        assert_eq!(
            repo.find_optional_by_username("AAA").await.unwrap().unwrap().age,
            10
        );
        let err = repo.find_optional_by_username("BBB").await.unwrap_err();
        assert!(matches!(err, FolioError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_find_by_age_page() {
        let repo = seeded(&[
            ("member1", 10),
            ("member2", 10),
            ("member3", 10),
            ("member4", 10),
            ("member5", 10),
            ("other", 30),
        ])
        .await;
        let request = PageRequest::of(0, 3, Sort::by(Direction::Desc, ["username"])).unwrap();

        let page = repo.find_by_age_page(10, request).await.unwrap();

        let names: Vec<&str> = page.content().iter().map(|m| m.username.as_str()).collect();
        assert_eq!(names, ["member5", "member4", "member3"]);
        assert_eq!(page.total_elements(), 5);
        assert_eq!(page.number(), 0);
        assert_eq!(page.total_pages(), 2);
        assert!(page.is_first());
        assert!(page.has_next());
    }

    #[tokio::test]
    async fn test_find_by_age_slice() {
        let repo = seeded(&[("m1", 10), ("m2", 10), ("m3", 10), ("m4", 10)]).await;
        let request = PageRequest::of(0, 3, Sort::by(Direction::Asc, ["id"])).unwrap();

        let slice = repo.find_by_age_slice(10, request).await.unwrap();
        assert_eq!(slice.number_of_elements(), 3);
        assert!(slice.has_next());

        let next = repo
            .find_by_age_slice(10, slice.next_request().unwrap())
            .await
            .unwrap();
        assert_eq!(next.number_of_elements(), 1);
        assert!(next.is_last());
    }

    #[tokio::test]
    async fn test_unknown_sort_field() {
        let repo = seeded(&[("m1", 10)]).await;
        let request = PageRequest::of(0, 3, Sort::by(Direction::Asc, ["team"])).unwrap();
        let err = repo.find_all_page(request).await.unwrap_err();
        assert!(matches!(err, FolioError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_bulk_age_plus() {
        let repo = seeded(&[
            ("member1", 10),
            ("member2", 19),
            ("member3", 20),
            ("member4", 21),
            ("member5", 40),
        ])
        .await;

        assert_eq!(repo.bulk_age_plus(20).await.unwrap(), 3);
        let member5 = repo.find_by_username("member5").await.unwrap();
        assert_eq!(member5[0].age, 41);
        let member2 = repo.find_by_username("member2").await.unwrap();
        assert_eq!(member2[0].age, 19);
    }

    #[tokio::test]
    async fn test_find_member_custom() {
        let repo = seeded(&[("a", 1), ("b", 2)]).await;
        assert_eq!(repo.find_member_custom().await.unwrap().len(), 2);
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::ContentStore;
use crate::cache::{keys, CacheStore};
use crate::defaults;
use crate::models::{Experience, HeroProfile, Project, Skill};

/// Maximum time the loading state may delay first paint.
/// After this the page renders with seeded data regardless of the network.
pub const FIRST_PAINT_DEADLINE: Duration = Duration::from_millis(1500);

/// Idempotent "loading-done" transition shared between the refresh path and
/// the failsafe timer. Both race to close it; whichever arrives second is a
/// no-op, so the ordering never matters.
#[derive(Clone)]
pub struct LoadingGate {
    loading: Arc<AtomicBool>,
}

impl LoadingGate {
    fn new(loading: bool) -> Self {
        Self {
            loading: Arc::new(AtomicBool::new(loading)),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Close the gate. Returns true only for the transition that actually
    /// cleared the loading state.
    pub fn finish(&self) -> bool {
        self.loading.swap(false, Ordering::SeqCst)
    }
}

/// The always-renderable content snapshot.
///
/// Every field has a value at all times: cached, remote, or bundled default.
#[derive(Debug, Clone)]
pub struct ContentState {
    pub hero: HeroProfile,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
}

/// Orchestrates "cache-first render, background refresh".
pub struct SyncCoordinator {
    cache: CacheStore,
    state: ContentState,
    gate: LoadingGate,
}

impl SyncCoordinator {
    /// Seed the render state from the cache, falling back to the bundled
    /// defaults per collection.
    ///
    /// The loading flag is raised only when no hero entry has ever been
    /// written - a genuinely first visit. Any prior entry, even one that no
    /// longer parses, means the cache seed is good enough to render now.
    pub fn new(cache: CacheStore) -> Self {
        let first_visit = !cache.contains(keys::HERO);

        let state = ContentState {
            hero: cache.read(keys::HERO).unwrap_or_else(defaults::hero),
            skills: cache.read(keys::SKILLS).unwrap_or_else(defaults::skills),
            experiences: cache
                .read(keys::EXPERIENCES)
                .unwrap_or_else(defaults::experiences),
            projects: cache.read(keys::PROJECTS).unwrap_or_else(defaults::projects),
        };

        debug!(first_visit, "Sync coordinator seeded from cache");

        Self {
            cache,
            state,
            gate: LoadingGate::new(first_visit),
        }
    }

    pub fn state(&self) -> &ContentState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.gate.is_loading()
    }

    /// Spawn the failsafe timer that bounds first paint.
    ///
    /// The original behavior is kept: the timer is not cancelled when real
    /// data arrives earlier, it simply loses the race against the gate.
    pub fn spawn_failsafe(&self) -> JoinHandle<()> {
        let gate = self.gate.clone();
        tokio::spawn(async move {
            tokio::time::sleep(FIRST_PAINT_DEADLINE).await;
            if gate.finish() {
                warn!("Initial sync still pending at the first-paint deadline - rendering with seeded data");
            }
        })
    }

    /// Reconcile the render state with the remote store.
    ///
    /// All four fetches run concurrently with isolated failure domains: a
    /// failed or empty collection result is ignored and the prior value kept,
    /// both in memory and in the cache. The hero singleton is replaced on any
    /// non-null result. The loading gate is closed unconditionally at the end.
    pub async fn refresh<S: ContentStore + ?Sized>(&mut self, store: &S) {
        info!("Starting content refresh");

        let (hero, projects, skills, experiences) = futures::join!(
            store.fetch_hero(),
            store.fetch_projects(),
            store.fetch_skills(),
            store.fetch_experiences(),
        );

        match hero {
            Ok(Some(hero)) => {
                self.state.hero = hero;
                self.cache.write(keys::HERO, &self.state.hero);
            }
            Ok(None) => debug!("No remote hero profile, keeping current"),
            Err(e) => debug!(error = %e, "Hero fetch failed, keeping current"),
        }

        apply_collection(&self.cache, keys::PROJECTS, projects, &mut self.state.projects);
        apply_collection(&self.cache, keys::SKILLS, skills, &mut self.state.skills);
        apply_collection(
            &self.cache,
            keys::EXPERIENCES,
            experiences,
            &mut self.state.experiences,
        );

        if self.gate.finish() {
            debug!("Loading cleared by refresh");
        }
        info!("Content refresh complete");
    }
}

/// Overwrite a collection and write it through to the cache, but only for a
/// successful non-empty result. An empty or failed fetch must never erase a
/// previously good value.
fn apply_collection<T: Serialize>(
    cache: &CacheStore,
    key: &str,
    result: anyhow::Result<Vec<T>>,
    slot: &mut Vec<T>,
) {
    match result {
        Ok(fetched) if !fetched.is_empty() => {
            *slot = fetched;
            cache.write(key, slot);
        }
        Ok(_) => debug!(collection = key, "Empty fetch result ignored"),
        Err(e) => debug!(collection = key, error = %e, "Fetch failed, prior value retained"),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockStore;
    use crate::models::SkillCategory;

    fn temp_cache() -> (tempfile::TempDir, CacheStore) {
        let dir = tempfile::tempdir().unwrap();
        let cache = CacheStore::new(dir.path().to_path_buf()).unwrap();
        (dir, cache)
    }

    fn cache_at(dir: &tempfile::TempDir) -> CacheStore {
        CacheStore::new(dir.path().to_path_buf()).unwrap()
    }

    fn skill(name: &str, level: u8) -> Skill {
        Skill {
            id: None,
            name: name.to_string(),
            level,
            category: SkillCategory::Backend,
        }
    }

    #[test]
    fn test_first_visit_starts_loading() {
        let (_dir, cache) = temp_cache();
        let coordinator = SyncCoordinator::new(cache);
        assert!(coordinator.is_loading());
        // Seeded with bundled defaults
        assert_eq!(coordinator.state().hero.name, defaults::hero().name);
        assert!(!coordinator.state().skills.is_empty());
    }

    #[test]
    fn test_cached_hero_renders_without_loading() {
        let (dir, cache) = temp_cache();
        let mut hero = defaults::hero();
        hero.name = "X".to_string();
        cache.write(keys::HERO, &hero);

        let coordinator = SyncCoordinator::new(cache_at(&dir));
        assert!(!coordinator.is_loading());
        assert_eq!(coordinator.state().hero.name, "X");
    }

    #[tokio::test(start_paused = true)]
    async fn test_failsafe_bounds_first_paint() {
        let (_dir, cache) = temp_cache();
        let coordinator = SyncCoordinator::new(cache);
        assert!(coordinator.is_loading());

        let failsafe = coordinator.spawn_failsafe();

        // Just before the deadline the loading state is still up
        tokio::time::sleep(Duration::from_millis(1400)).await;
        assert!(coordinator.is_loading());

        // At the deadline it clears without any data having arrived
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!coordinator.is_loading());
        failsafe.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_failsafe_is_noop_after_refresh_wins() {
        let (_dir, cache) = temp_cache();
        let mut coordinator = SyncCoordinator::new(cache);
        let failsafe = coordinator.spawn_failsafe();

        let store = MockStore::new();
        store.set_hero(defaults::hero());
        coordinator.refresh(&store).await;
        assert!(!coordinator.is_loading());

        // Timer still fires, harmlessly
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(!coordinator.is_loading());
        failsafe.await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_and_failed_fetches_are_non_destructive() {
        let (dir, cache) = temp_cache();
        let seeded = vec![skill("A", 50), skill("B", 60)];
        cache.write(keys::SKILLS, &seeded);
        cache.write(keys::HERO, &defaults::hero());

        let mut coordinator = SyncCoordinator::new(cache_at(&dir));
        assert_eq!(coordinator.state().skills, seeded);

        let store = MockStore::new();
        // skills come back empty, experiences fail outright, projects succeed
        store.set_projects(vec![Project {
            id: Some("p-1".to_string()),
            title: "New".to_string(),
            description: "Fresh".to_string(),
            tech: vec![],
            link: None,
            github: None,
            image: None,
        }]);
        store.fail("fetch_experiences");

        coordinator.refresh(&store).await;

        // Prior skills retained in memory and on disk
        assert_eq!(coordinator.state().skills, seeded);
        let cached: Vec<Skill> = cache_at(&dir).read(keys::SKILLS).unwrap();
        assert_eq!(cached, seeded);

        // Experiences retained despite the failure
        assert_eq!(coordinator.state().experiences, defaults::experiences());

        // The one successful non-empty collection was replaced
        assert_eq!(coordinator.state().projects.len(), 1);
        assert_eq!(coordinator.state().projects[0].title, "New");
    }

    #[tokio::test(start_paused = true)]
    async fn test_remote_skills_reconcile_and_write_through() {
        let (dir, cache) = temp_cache();
        let mut hero = defaults::hero();
        hero.name = "X".to_string();
        cache.write(keys::HERO, &hero);

        let mut coordinator = SyncCoordinator::new(cache_at(&dir));
        assert!(!coordinator.is_loading());

        let store = MockStore::new();
        let remote = vec![Skill {
            id: Some("s-go".to_string()),
            name: "Go".to_string(),
            level: 80,
            category: SkillCategory::Backend,
        }];
        store.set_skills(remote.clone());
        store.set_fetch_delay(Duration::from_millis(200));

        coordinator.refresh(&store).await;

        assert_eq!(coordinator.state().skills, remote);
        let cached: Vec<Skill> = cache_at(&dir).read(keys::SKILLS).unwrap();
        assert_eq!(cached, remote);
    }

    #[tokio::test]
    async fn test_hero_replaced_on_any_nonnull_result() {
        let (_dir, cache) = temp_cache();
        let mut coordinator = SyncCoordinator::new(cache);

        let store = MockStore::new();
        let mut remote_hero = defaults::hero();
        remote_hero.name = "Remote Name".to_string();
        remote_hero.available = false;
        store.set_hero(remote_hero);

        coordinator.refresh(&store).await;
        assert_eq!(coordinator.state().hero.name, "Remote Name");
        assert!(!coordinator.state().hero.available);
        assert!(!coordinator.is_loading());
    }

    #[tokio::test]
    async fn test_refresh_clears_loading_even_when_everything_fails() {
        let (_dir, cache) = temp_cache();
        let mut coordinator = SyncCoordinator::new(cache);
        assert!(coordinator.is_loading());

        let store = MockStore::new();
        store.fail("fetch_hero");
        store.fail("fetch_projects");
        store.fail("fetch_skills");
        store.fail("fetch_experiences");

        coordinator.refresh(&store).await;
        assert!(!coordinator.is_loading());
        // Defaults still in place
        assert_eq!(coordinator.state().projects, defaults::projects());
    }
}

use crate::{FavoriteRepository, sa};

/// The item a favorite toggle applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FavoriteTarget {
    pub ty: sa::FavoriteType,
    pub hash: String,
}
impl FavoriteTarget {
    pub fn new(ty: sa::FavoriteType, hash: impl Into<String>) -> Self {
        Self {
            ty,
            hash: hash.into(),
        }
    }
}
impl std::fmt::Display for FavoriteTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.ty.as_str(), self.hash)
    }
}

/// Local state that shows favorite flags.
pub trait FavoriteViews {
    /// Writes `favorite` into every view that shows `target`. Implementations
    /// must update all of them in this one call.
    fn set_favorite(&mut self, target: &FavoriteTarget, favorite: bool);
}

/// A favorite toggle that has been applied locally and awaits the server.
///
/// Toggles are not serialized per item: a second toggle issued before the
/// first resolves proceeds on its own, and whichever resolves last decides the
/// final flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingToggle {
    pub target: FavoriteTarget,
    /// The flag before the toggle.
    pub original: bool,
    /// The epoch of the state container that issued the toggle.
    pub epoch: u64,
}
impl PendingToggle {
    /// Writes the optimistic flag (`!original`) into `views`.
    pub fn begin(
        views: &mut impl FavoriteViews,
        target: FavoriteTarget,
        original: bool,
        epoch: u64,
    ) -> Self {
        tracing::debug!("Optimistically setting {target} favorite={}", !original);
        views.set_favorite(&target, !original);
        Self {
            target,
            original,
            epoch,
        }
    }

    /// Sends the mutation matching the flag before the toggle: adding when it
    /// was not a favorite, removing when it was.
    pub async fn dispatch(&self, favorites: &dyn FavoriteRepository) -> sa::ClientResult<bool> {
        if self.original {
            favorites
                .remove_favorite(self.target.ty, &self.target.hash)
                .await
        } else {
            favorites.add_favorite(self.target.ty, &self.target.hash).await
        }
    }

    /// Reconciles `views` with the server's answer: its value on success, the
    /// original flag on failure. Returns the flag written.
    pub fn resolve(
        &self,
        views: &mut impl FavoriteViews,
        outcome: &sa::ClientResult<bool>,
    ) -> bool {
        let favorite = match outcome {
            Ok(server_value) => *server_value,
            Err(e) => {
                tracing::warn!(
                    "Favorite update for {} failed, rolling back to {}: {e}",
                    self.target,
                    self.original
                );
                self.original
            }
        };
        views.set_favorite(&self.target, favorite);
        favorite
    }
}

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::player::Player;
use crate::core::constants::{SAVE_DIR_NAME, SAVE_FILE_NAME};
use crate::core::error::{GameError, GameResult};

/// Saves and loads the player as pretty-printed JSON.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Uses `~/.ermanda/savegame.json`, creating the directory if needed.
    pub fn new() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;

        let save_dir = home_dir.join(SAVE_DIR_NAME);
        fs::create_dir_all(&save_dir)?;

        Ok(Self {
            save_path: save_dir.join(SAVE_FILE_NAME),
        })
    }

    /// Uses an explicit file path. The parent directory must exist when saving.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    pub fn save(&self, player: &Player) -> GameResult<()> {
        let json = serde_json::to_string_pretty(player)
            .map_err(|e| GameError::SaveFailed(e.to_string()))?;
        fs::write(&self.save_path, json).map_err(|e| GameError::SaveFailed(e.to_string()))?;
        tracing::info!(path = %self.save_path.display(), "game saved");
        Ok(())
    }

    /// Loads and validates the saved player.
    ///
    /// Any failure is reported as [`GameError::LoadFailed`]; choosing a fresh
    /// player instead is the caller's decision.
    pub fn load(&self) -> GameResult<Player> {
        let json = fs::read_to_string(&self.save_path).map_err(|e| self.load_failed(e))?;
        let player: Player = serde_json::from_str(&json).map_err(|e| self.load_failed(e))?;
        player.validate().map_err(|e| self.load_failed(e))?;
        tracing::info!(path = %self.save_path.display(), level = player.level, "game loaded");
        Ok(player)
    }

    pub fn delete(&self) -> io::Result<()> {
        fs::remove_file(&self.save_path)
    }

    fn load_failed(&self, reason: impl ToString) -> GameError {
        GameError::LoadFailed {
            path: self.save_path.clone(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Item;
    use tempfile::TempDir;

    fn manager_in(dir: &TempDir) -> SaveManager {
        SaveManager::with_path(dir.path().join(SAVE_FILE_NAME))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);

        let mut player = Player::new();
        player.add_experience(450);
        player.add_to_inventory(Item::weapon("Steel sword", 100, 25));
        player.add_to_inventory(Item::armor("Leather armor", 75, 20));
        player.equip_from_inventory(0);
        player.take_damage(12);

        manager.save(&player).unwrap();
        assert!(manager.save_exists());
        assert_eq!(manager.load().unwrap(), player);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);

        assert!(!manager.save_exists());
        assert!(matches!(manager.load(), Err(GameError::LoadFailed { .. })));
    }

    #[test]
    fn test_load_corrupt_file_fails() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);
        fs::write(manager.path(), "{ not json").unwrap();

        assert!(matches!(manager.load(), Err(GameError::LoadFailed { .. })));
    }

    #[test]
    fn test_load_missing_field_fails() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);
        fs::write(manager.path(), r#"{"health": 10, "max_health": 100}"#).unwrap();

        assert!(matches!(manager.load(), Err(GameError::LoadFailed { .. })));
    }

    #[test]
    fn test_load_rejects_invalid_state() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);
        let mut player = Player::new();
        player.level = 0;
        fs::write(manager.path(), serde_json::to_string(&player).unwrap()).unwrap();

        let err = manager.load().unwrap_err();
        assert!(err.to_string().contains("level"));
    }

    #[test]
    fn test_delete_removes_file() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);
        manager.save(&Player::new()).unwrap();
        manager.delete().unwrap();
        assert!(!manager.save_exists());
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let manager = SaveManager::with_path(dir.path().join("nope").join("save.json"));
        assert!(matches!(
            manager.save(&Player::new()),
            Err(GameError::SaveFailed(_))
        ));
    }
}

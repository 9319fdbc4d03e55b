//! [`MemoryStorage`]: an in-process storage scope.

use std::{cell::RefCell, collections::BTreeMap, convert::Infallible, rc::Rc};

use campus_core::storage::KeyValueStorage;

/// A key-value scope held in memory.
///
/// Clones share the same map, the way every part of a page sees the same
/// browser storage. Dropping the last clone ends the scope, which makes it a
/// natural short-lived (session) scope.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
  entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
  pub fn new() -> Self { Self::default() }

  /// A scope pre-populated with `entries`.
  pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
  where
    K: Into<String>,
    V: Into<String>,
  {
    let map = entries
      .into_iter()
      .map(|(k, v)| (k.into(), v.into()))
      .collect();
    Self { entries: Rc::new(RefCell::new(map)) }
  }

  pub fn len(&self) -> usize { self.entries.borrow().len() }

  pub fn is_empty(&self) -> bool { self.entries.borrow().is_empty() }

  /// Read a value without going through the trait.
  pub fn peek(&self, key: &str) -> Option<String> {
    self.entries.borrow().get(key).cloned()
  }
}

impl KeyValueStorage for MemoryStorage {
  type Error = Infallible;

  fn get(&self, key: &str) -> Result<Option<String>, Infallible> {
    Ok(self.peek(key))
  }

  fn set(&mut self, key: &str, value: &str) -> Result<(), Infallible> {
    self
      .entries
      .borrow_mut()
      .insert(key.to_owned(), value.to_owned());
    Ok(())
  }

  fn remove(&mut self, key: &str) -> Result<(), Infallible> {
    self.entries.borrow_mut().remove(key);
    Ok(())
  }

  fn clear(&mut self) -> Result<(), Infallible> {
    self.entries.borrow_mut().clear();
    Ok(())
  }
}

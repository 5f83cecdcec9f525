use crate::error::Result;
use crate::splay_tree::tree::Tree;
use std::borrow::Borrow;
use std::iter::FromIterator;

/// An ordered set implemented using a splay tree.
///
/// A splay tree is a self-adjusting binary search tree with the additional property that recently
/// accessed keys are quick to access again. Every successful `insert` or `search` splays the
/// accessed key to the root of the tree; no balance bookkeeping is kept. Nodes are stored in an
/// index-addressed arena, and parent links are non-owning indices.
///
/// # Examples
///
/// ```
/// use splay_collections::splay_tree::SplaySet;
///
/// let mut set = [8, 2, 4, 3, 11, 9].iter().cloned().collect::<SplaySet<u32>>();
///
/// assert_eq!(set.len(), 6);
/// assert_eq!(set.root_key(), Some(&9));
///
/// assert_eq!(set.search(&3), Ok(&3));
/// assert_eq!(set.root_key(), Some(&3));
///
/// assert_eq!(set.remove(&3), Ok(3));
/// assert_eq!(set.len(), 5);
/// ```
pub struct SplaySet<T> {
    tree: Tree<T>,
}

impl<T> SplaySet<T> {
    /// Constructs a new, empty `SplaySet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let set: SplaySet<u32> = SplaySet::new();
    /// ```
    pub fn new() -> Self {
        SplaySet { tree: Tree::new() }
    }

    /// Inserts a key into the set and splays it to the root. If the key already exists in the
    /// set, it will return an error and leave the set untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::error::Error;
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// assert_eq!(set.insert(1), Ok(()));
    /// assert_eq!(set.root_key(), Some(&1));
    /// assert_eq!(set.insert(1), Err(Error::DuplicateKey));
    /// ```
    pub fn insert(&mut self, key: T) -> Result<()>
    where
        T: Ord,
    {
        self.tree.insert(key)
    }

    /// Searches for a key in the set and splays it to the root, returning a reference to the
    /// stored key. If the key does not exist in the set, it will return an error and leave the
    /// set untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::error::Error;
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// assert_eq!(set.insert(1), Ok(()));
    /// assert_eq!(set.search(&1), Ok(&1));
    /// assert_eq!(set.search(&0), Err(Error::KeyNotFound));
    /// ```
    pub fn search<V>(&mut self, key: &V) -> Result<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.search(key)
    }

    /// Removes a key from the set, returning the stored key. If the key does not exist in the
    /// set, it will return an error and leave the set untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::error::Error;
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// assert_eq!(set.insert(1), Ok(()));
    /// assert_eq!(set.remove(&1), Ok(1));
    /// assert_eq!(set.remove(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Result<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.remove(key)
    }

    /// Returns a reference to the key at the root of the tree, or `None` if the set is empty.
    /// After a successful `insert` or `search`, the root holds the accessed key.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// assert_eq!(set.insert(1), Ok(()));
    /// assert_eq!(set.insert(3), Ok(()));
    /// assert_eq!(set.root_key(), Some(&3));
    /// ```
    pub fn root_key(&self) -> Option<&T> {
        self.tree.root_key()
    }

    /// Returns the number of keys in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// assert_eq!(set.insert(1), Ok(()));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let set: SplaySet<u32> = SplaySet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the set, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// assert_eq!(set.insert(1), Ok(()));
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }
}

impl<T> Default for SplaySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a set from a sequence of keys. The first occurrence of each key wins; later duplicates
/// are silently skipped.
impl<T> FromIterator<T> for SplaySet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = SplaySet::new();
        for key in iter {
            let _ = set.insert(key);
        }
        set
    }
}

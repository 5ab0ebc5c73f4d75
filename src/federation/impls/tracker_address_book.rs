use crate::federation::structs::tracker_address_book::TrackerAddressBook;

impl TrackerAddressBook {
    pub fn new() -> TrackerAddressBook {
        TrackerAddressBook::default()
    }

    /// Returns `true` when the address was not known before.
    pub fn add(&self, address: &str) -> bool
    {
        let address = address.trim();
        if address.is_empty() || self.is_own_address(address) {
            return false;
        }
        let mut addresses = self.addresses.lock();
        if addresses.iter().any(|known| known == address) {
            return false;
        }
        addresses.push(address.to_string());
        true
    }

    /// Adds every unknown address, returning how many were new.
    pub fn merge<I, S>(&self, addresses: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        addresses.into_iter().filter(|address| self.add(address.as_ref())).count()
    }

    pub fn snapshot(&self) -> Vec<String>
    {
        self.addresses.lock().clone()
    }

    pub fn contains(&self, address: &str) -> bool
    {
        self.addresses.lock().iter().any(|known| known == address)
    }

    pub fn len(&self) -> usize
    {
        self.addresses.lock().len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.addresses.lock().is_empty()
    }

    pub fn set_own_address(&self, address: String)
    {
        self.addresses.lock().retain(|known| *known != address);
        *self.own_address.write() = Some(address);
    }

    pub fn own_address(&self) -> Option<String>
    {
        self.own_address.read().clone()
    }

    fn is_own_address(&self, address: &str) -> bool
    {
        self.own_address.read().as_deref() == Some(address)
    }
}

use crate::peer::structs::port_bindings::PortBindings;

impl PortBindings {
    pub fn new() -> PortBindings {
        PortBindings::default()
    }

    pub fn bind(&self, port: u16, file_name: &str)
    {
        self.ports.write().insert(port, file_name.to_string());
    }

    pub fn unbind(&self, port: u16) -> Option<String>
    {
        self.ports.write().remove(&port)
    }

    pub fn file_for(&self, port: u16) -> Option<String>
    {
        self.ports.read().get(&port).cloned()
    }

    pub fn port_for(&self, file_name: &str) -> Option<u16>
    {
        self.ports.read().iter().find(|(_, bound)| *bound == file_name).map(|(port, _)| *port)
    }

    /// `true` when `port` is bound to exactly `file_name`.
    pub fn authorizes(&self, port: u16, file_name: &str) -> bool
    {
        self.ports.read().get(&port).is_some_and(|bound| bound == file_name)
    }

    pub fn len(&self) -> usize
    {
        self.ports.read().len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.ports.read().is_empty()
    }
}

//! Peer addresses in the `enode://<node id>[:<user info>]@<host>:<port>` form.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnodeAddress {
    raw: String,
    node_id: String,
    user_info: Option<String>,
    host: String,
    port: u16,
}

const SCHEME: &str = "enode://";

impl EnodeAddress {
    pub fn parse(s: String) -> Result<EnodeAddress, String> {
        let Some(rest) = s.strip_prefix(SCHEME) else {
            return Err(format!("{} does not start with `{}`.", s, SCHEME));
        };
        let Some((identity, location)) = rest.rsplit_once('@') else {
            return Err(format!("{} is missing the `@host:port` part.", s));
        };

        let (node_id, user_info) = match identity.split_once(':') {
            Some((node_id, user_info)) => {
                if user_info.is_empty() {
                    return Err(format!("{} has an empty user info segment.", s));
                }
                (node_id, Some(user_info.to_string()))
            }
            None => (identity, None),
        };
        if node_id.is_empty() || !node_id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("{} does not carry a hex node id.", s));
        }

        let Some((host, port)) = location.rsplit_once(':') else {
            return Err(format!("{} is missing a port.", s));
        };
        if host.is_empty() || host.chars().any(char::is_whitespace) {
            return Err(format!("{} has an invalid host.", s));
        }
        let port = match port.parse::<u16>() {
            Ok(port) if port > 0 => port,
            _ => return Err(format!("{} has an invalid port.", s)),
        };

        Ok(Self {
            node_id: node_id.to_string(),
            user_info,
            host: host.to_string(),
            port,
            raw: s,
        })
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn user_info(&self) -> Option<&str> {
        self.user_info.as_deref()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl AsRef<str> for EnodeAddress {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for EnodeAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.raw.fmt(f)
    }
}

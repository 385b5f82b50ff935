//! Built-in install script catalog.
//!
//! Each entry fetches a bootstrap payload from a fixed address and forwards the
//! argument list to it. The argument encoding differs per environment and is
//! stated on each renderer; shell entries pass arguments through unescaped.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde_json::Value;

use crate::domain::{AppError, Environment, Role, ScriptDescriptor};
use crate::ports::ScriptCatalog;

const INITIATOR: &[Role] = &[Role::Initiator];
const REMOTE: &[Role] = &[Role::Remote];
const BOTH: &[Role] = &[Role::Initiator, Role::Remote];

/// Catalog table in presentation order.
pub const BUILTIN_INSTALL_SCRIPTS: [ScriptDescriptor; 11] = [
    ScriptDescriptor {
        roles: INITIATOR,
        name: "Unix (curl)",
        environment: Environment::Bash,
        public_safe: true,
        renderer: unix_curl_initiator,
    },
    ScriptDescriptor {
        roles: REMOTE,
        name: "Unix (curl)",
        environment: Environment::Bash,
        public_safe: true,
        renderer: unix_curl_remote,
    },
    ScriptDescriptor {
        roles: INITIATOR,
        name: "Unix (wget)",
        environment: Environment::Bash,
        public_safe: true,
        renderer: unix_wget_initiator,
    },
    ScriptDescriptor {
        roles: REMOTE,
        name: "Unix (wget)",
        environment: Environment::Bash,
        public_safe: true,
        renderer: unix_wget_remote,
    },
    ScriptDescriptor {
        roles: BOTH,
        name: "Windows (PowerShell)",
        environment: Environment::PowerShell,
        public_safe: true,
        renderer: windows_powershell,
    },
    ScriptDescriptor {
        roles: INITIATOR,
        name: "Docker",
        environment: Environment::Bash,
        public_safe: false,
        renderer: docker,
    },
    ScriptDescriptor {
        roles: REMOTE,
        name: "Node.js",
        environment: Environment::JavaScript,
        public_safe: false,
        renderer: node_js,
    },
    ScriptDescriptor {
        roles: REMOTE,
        name: "Python 3",
        environment: Environment::Python,
        public_safe: false,
        renderer: python3,
    },
    ScriptDescriptor {
        roles: REMOTE,
        name: ".NET Core",
        environment: Environment::CSharp,
        public_safe: false,
        renderer: dotnet_core,
    },
    ScriptDescriptor {
        roles: REMOTE,
        name: "Java",
        environment: Environment::Java,
        public_safe: false,
        renderer: java,
    },
    ScriptDescriptor {
        roles: REMOTE,
        name: "PHP",
        environment: Environment::Php,
        public_safe: false,
        renderer: php,
    },
];

/// Positional shell words, joined with single spaces and not escaped.
fn space_joined(args: &[String]) -> String {
    args.join(" ")
}

/// The whole list as one JSON array literal.
fn json_array(args: &[String]) -> String {
    Value::from(args.to_vec()).to_string()
}

/// Each element as a JSON string literal, comma separated, no brackets.
fn json_literals(args: &[String]) -> String {
    args.iter().map(|arg| Value::from(arg.as_str()).to_string()).collect::<Vec<_>>().join(",")
}

// Unescaped: process substitution of init.sh, arguments appended as shell words.
fn unix_curl_initiator(args: &[String]) -> String {
    format!("sh <(curl -sSf https://lets.tunshell.com/init.sh) {}", space_joined(args))
}

// Unescaped: init.sh piped into sh, arguments appended as shell words.
fn unix_curl_remote(args: &[String]) -> String {
    format!("curl -sSf https://lets.tunshell.com/init.sh | sh /dev/stdin {}", space_joined(args))
}

// Unescaped.
fn unix_wget_initiator(args: &[String]) -> String {
    format!(
        "sh <(wget https://lets.tunshell.com/init.sh -O /dev/stdout 2> /dev/null) {}",
        space_joined(args)
    )
}

// Unescaped.
fn unix_wget_remote(args: &[String]) -> String {
    format!(
        "wget https://lets.tunshell.com/init.sh -O /dev/stdout 2> /dev/null | sh /dev/stdin {}",
        space_joined(args)
    )
}

// Unescaped: arguments follow the invoked script block as PowerShell words.
fn windows_powershell(args: &[String]) -> String {
    format!(
        "[System.Net.ServicePointManager]::SecurityProtocol = [System.Net.SecurityProtocolType]::Tls12; \
         &$([scriptblock]::Create((New-Object System.Net.WebClient).DownloadString('https://lets.tunshell.com/init.ps1'))) {}",
        space_joined(args)
    )
}

// Unescaped: arguments become the container command.
fn docker(args: &[String]) -> String {
    format!("docker run --rm -it timetoogo/tunshell {}", space_joined(args))
}

// JSON array bound to `args` in the sandbox context.
fn node_js(args: &[String]) -> String {
    format!(
        "require('https').get('https://lets.tunshell.com/init.js',r=>{{let s=\"\";r.setEncoding('utf8');\
         r.on('data',(d)=>s+=d);r.on('end',()=>require('vm').runInNewContext(s,{{require,args:{}}}))}});",
        json_array(args)
    )
}

// JSON array bound to `p` in the exec globals; valid as a Python list literal.
fn python3(args: &[String]) -> String {
    format!(
        "import urllib.request;r=urllib.request.urlopen('https://lets.tunshell.com/init.py') ;\
         exec(r.read().decode('utf-8'),{{'p':{}}})",
        json_array(args)
    )
}

// JSON string literals inside a C# string[] initializer.
fn dotnet_core(args: &[String]) -> String {
    format!(
        "System.Reflection.Assembly.Load(new System.Net.WebClient().DownloadData(\"https://lets.tunshell.com/init.dotnet.dll\"))\
         .EntryPoint.Invoke(null,new []{{new string[]{{{}}}}});",
        json_literals(args)
    )
}

// JSON string literals inside a Java String[] initializer.
fn java(args: &[String]) -> String {
    format!(
        "new URLClassLoader(new URL[]{{new URL(\"https://lets.tunshell.com/init.jar\")}}).loadClass(\"init\")\
         .getMethod(\"main\",String[].class).invoke(null,(Object)new String[]{{{}}});",
        json_literals(args)
    )
}

// JSON array, which PHP parses as a short array literal.
fn php(args: &[String]) -> String {
    format!("(eval(file_get_contents('https://lets.tunshell.com/init.php')))({});", json_array(args))
}

/// Immutable install script catalog with a validated (role, name) index.
pub struct BuiltinScriptCatalog {
    descriptors: Vec<ScriptDescriptor>,
    index: BTreeMap<Role, BTreeMap<&'static str, usize>>,
}

impl BuiltinScriptCatalog {
    /// Build the built-in catalog.
    pub fn new() -> Result<Self, AppError> {
        Self::from_descriptors(BUILTIN_INSTALL_SCRIPTS.to_vec())
    }

    /// Build a catalog from an arbitrary table, rejecting entries without roles
    /// and names repeated within a role.
    pub fn from_descriptors(descriptors: Vec<ScriptDescriptor>) -> Result<Self, AppError> {
        let mut index: BTreeMap<Role, BTreeMap<&'static str, usize>> = BTreeMap::new();

        for (position, descriptor) in descriptors.iter().enumerate() {
            if descriptor.roles.is_empty() {
                return Err(AppError::EmptyRoles(descriptor.name.to_string()));
            }
            for &role in descriptor.roles {
                if index.entry(role).or_default().insert(descriptor.name, position).is_some() {
                    return Err(AppError::DuplicateDescriptor {
                        role,
                        name: descriptor.name.to_string(),
                    });
                }
            }
        }

        Ok(Self { descriptors, index })
    }

    /// Process-wide catalog, built on first use and never mutated.
    pub fn shared() -> &'static BuiltinScriptCatalog {
        static CATALOG: OnceLock<BuiltinScriptCatalog> = OnceLock::new();
        CATALOG.get_or_init(BuiltinScriptCatalog::default)
    }
}

impl Default for BuiltinScriptCatalog {
    fn default() -> Self {
        Self::new().expect("Built-in install script catalog is inconsistent")
    }
}

impl ScriptCatalog for BuiltinScriptCatalog {
    fn descriptors(&self) -> &[ScriptDescriptor] {
        &self.descriptors
    }

    fn lookup(&self, role: Role, name: &str) -> Option<&ScriptDescriptor> {
        let position = self.index.get(&role)?.get(name)?;
        Some(&self.descriptors[*position])
    }
}

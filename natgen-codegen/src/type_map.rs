// Native type → C# type mapping for both sides of the call boundary.

use crate::schema::NativeType;

/// Which side of the native boundary a type token is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Ergonomic managed-facing signatures (`string`, `bool`, `ref int`).
    Managed,
    /// The unmanaged function pointer signature (`nint`, `byte`, `int*`).
    Native,
}

/// Map a native type to its C# token. Total over the enum for both
/// boundaries; adding a `NativeType` member without extending this match is
/// a build-time error.
pub fn map_type(ty: NativeType, is_ref: bool, boundary: Boundary) -> String {
    let base = match ty {
        NativeType::Any => "int",
        NativeType::Boolean => match boundary {
            Boundary::Managed => "bool",
            Boundary::Native => "byte",
        },
        NativeType::Float => "float",
        NativeType::Int => "int",
        NativeType::String => match boundary {
            Boundary::Managed => "string",
            Boundary::Native => "nint",
        },
        NativeType::Vector3 => "Vector3",
        NativeType::Void => "void",
        NativeType::ScrHandle => "uint",
        NativeType::MemoryBuffer => "object",
        NativeType::Interior => "int",
        NativeType::Object => "uint",
        NativeType::Hash => "uint",
        NativeType::Entity => "uint",
        NativeType::Ped => "uint",
        NativeType::Vehicle => "uint",
        NativeType::Cam => "int",
        NativeType::FireId => "int",
        NativeType::Blip => "int",
        NativeType::Pickup => "int",
        NativeType::Player => "uint",
        NativeType::CarGenerator => "int",
        NativeType::Group => "int",
        NativeType::Train => "uint",
        NativeType::Weapon => "int",
        NativeType::Texture => "int",
        NativeType::TextureDict => "int",
        NativeType::CoverPoint => "int",
        NativeType::Camera => "int",
        NativeType::TaskSequence => "int",
        NativeType::ColourIndex => "int",
        NativeType::Sphere => "int",
    };

    if is_ref {
        match boundary {
            Boundary::Managed => format!("ref {base}"),
            Boundary::Native => format!("{base}*"),
        }
    } else {
        base.to_string()
    }
}

/// Wrapper interface accepted in place of a raw handle for overload
/// expansion. Only by-value parameters of these kinds are eligible.
pub fn overload_interface(ty: NativeType) -> Option<&'static str> {
    match ty {
        NativeType::Player | NativeType::Ped => Some("IPlayer"),
        NativeType::Vehicle => Some("IVehicle"),
        NativeType::Entity => Some("IEntity"),
        _ => None,
    }
}

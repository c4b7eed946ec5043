// Per-parameter marshaling plans for the unmanaged call boundary.
//
// Each plan is three ordered text fragments (statements before the call,
// the call-site argument expression, statements after the call). The
// emitter concatenates fragments generically; all type-specific knowledge
// lives here.

use crate::naming::arg_name;
use crate::schema::NativeType;
use crate::typedef::TypeDefParam;

/// Marshaling shim for one parameter. Statement lines carry no indentation.
pub struct MarshalPlan {
    pub pre_call: Vec<String>,
    pub call_arg: String,
    pub post_call: Vec<String>,
}

impl MarshalPlan {
    fn passthrough(arg: String) -> Self {
        MarshalPlan {
            pre_call: Vec::new(),
            call_arg: arg,
            post_call: Vec::new(),
        }
    }
}

/// Plan the shim for one input parameter.
///
/// Ref strings: the caller-allocated copy is freed unconditionally after the
/// call, and the (possibly replaced) native pointer is freed via the callee's
/// free routine only when it differs from the original. The native side must
/// never hand the original buffer back as the replacement.
pub fn plan_param(param: &TypeDefParam) -> MarshalPlan {
    let arg = arg_name(&param.name);

    match (param.native_type, param.is_ref) {
        (NativeType::String, true) => MarshalPlan {
            pre_call: vec![
                format!("var ptr{arg} = MemoryUtils.StringToHGlobalUtf8({arg});"),
                format!("var ref{arg} = ptr{arg};"),
            ],
            call_arg: format!("&ref{arg}"),
            post_call: vec![
                format!("{arg} = Marshal.PtrToStringUTF8(ref{arg});"),
                format!("if (ref{arg} != ptr{arg}) freeString(ref{arg});"),
                format!("Marshal.FreeHGlobal(ptr{arg});"),
            ],
        },
        (NativeType::String, false) => MarshalPlan {
            pre_call: vec![format!("var ptr{arg} = MemoryUtils.StringToHGlobalUtf8({arg});")],
            call_arg: format!("ptr{arg}"),
            post_call: vec![format!("Marshal.FreeHGlobal(ptr{arg});")],
        },
        (NativeType::Boolean, true) => MarshalPlan {
            pre_call: vec![format!("var ref{arg} = (byte) ({arg} ? 1 : 0);")],
            call_arg: format!("&ref{arg}"),
            post_call: vec![format!("{arg} = ref{arg} == 0 ? false : true;")],
        },
        (NativeType::Boolean, false) => {
            MarshalPlan::passthrough(format!("(byte) ({arg} ? 1 : 0)"))
        }
        (_, true) => MarshalPlan {
            pre_call: vec![format!("var ref{arg} = {arg};")],
            call_arg: format!("&ref{arg}"),
            post_call: vec![format!("{arg} = ref{arg};")],
        },
        (_, false) => MarshalPlan::passthrough(arg),
    }
}

/// Conversion plan for the call's return value.
pub struct ReturnPlan {
    /// Whether the call result is bound to `result` (non-void returns).
    pub bind_result: bool,
    /// Statements after the success check, ending in `return` for non-void.
    pub post_call: Vec<String>,
}

/// Plan the return conversion. Native-returned strings are read back and
/// freed via the free routine exactly once.
pub fn plan_return(ty: NativeType) -> ReturnPlan {
    match ty {
        NativeType::Void => ReturnPlan {
            bind_result: false,
            post_call: Vec::new(),
        },
        NativeType::String => ReturnPlan {
            bind_result: true,
            post_call: vec![
                "var strResult = Marshal.PtrToStringUTF8(result);".to_string(),
                "freeString(result);".to_string(),
                "return strResult;".to_string(),
            ],
        },
        NativeType::Boolean => ReturnPlan {
            bind_result: true,
            post_call: vec!["return result == 0 ? false : true;".to_string()],
        },
        _ => ReturnPlan {
            bind_result: true,
            post_call: vec!["return result;".to_string()],
        },
    }
}

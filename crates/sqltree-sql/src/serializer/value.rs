use super::{Formatter, Params, ToSql, Value};

impl ToSql for &Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Value::Bool(true) => fmt!(f, "true"),
            Value::Bool(false) => fmt!(f, "false"),
            Value::I64(value) => fmt!(f, *value),
            Value::String(value) => {
                f.dst.push('\'');
                f.dst.push_str(&value.replace('\'', "''"));
                f.dst.push('\'');
            }
        }
    }
}

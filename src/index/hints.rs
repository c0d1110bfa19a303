use super::fstree::FsNode;

/// 候选切割子串：某一长度上支持度最高的频繁子串。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub len: usize,
    pub seq: String,
    pub count: usize,
}

/// 逐层消费 FS 树流，为每个长度 L ∈ [1, depth] 选出支持度最高的节点
/// （平局取先出现者）。遇到首个 L > depth 的节点即终止。
pub fn extract_hints<I>(array: &[u8], stream: I, depth: usize) -> Vec<Hint>
where
    I: Iterator<Item = FsNode>,
{
    let mut hints: Vec<Hint> = Vec::new();
    let mut pending: Option<FsNode> = None;

    for node in stream {
        if node.len > depth {
            break;
        }
        pending = Some(match pending.take() {
            Some(best) if best.len == node.len => {
                if node.support() > best.support() {
                    node
                } else {
                    best
                }
            }
            Some(best) => {
                hints.push(to_hint(array, &best));
                node
            }
            None => node,
        });
    }

    if let Some(best) = pending {
        hints.push(to_hint(array, &best));
    }
    hints
}

fn to_hint(array: &[u8], node: &FsNode) -> Hint {
    Hint {
        len: node.len,
        seq: String::from_utf8_lossy(node.seq(array)).into_owned(),
        count: node.support(),
    }
}
